//! postcalc common types: the bytecode representation shared by the
//! compiler and the VM.
//!
//! This crate provides:
//!
//! - [`Opcode`] — the closed instruction set, with keyword and mnemonic
//!   tables
//! - [`RawOp`] — the raw unit type of an instruction stream
//! - [`ConstantPool`] — per-line literal storage referenced by slot
//! - [`Chunk`] — one compiled line: op stream plus its constant pool
//! - [`DecodeError`] — errors from decoding raw units
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod chunk;
pub mod error;
pub mod opcode;
pub mod pool;

// Re-export commonly used types at the crate root.
pub use chunk::{Checkpoint, Chunk};
pub use error::DecodeError;
pub use opcode::Opcode;
pub use pool::ConstantPool;

/// One raw unit of an instruction stream: an opcode discriminant, or the
/// constant-pool slot operand following a `Push`.
pub type RawOp = u64;
