//! postcalc virtual machine — executes compiled chunks against a
//! persistent evaluation stack.
//!
//! The VM is a straight-line stack machine: one linear pass over the op
//! stream, no branches, no calls. The evaluation stack has a fixed limit
//! (64 slots by default) and deliberately persists across chunks, so a
//! value left by one line is visible to the next.
//!
//! # Usage
//!
//! ```
//! use postcalc_common::Chunk;
//! use postcalc_compiler::compile;
//! use postcalc_vm::Vm;
//!
//! let mut chunk = Chunk::new();
//! compile("3 4 +\n", &mut chunk).unwrap();
//!
//! let mut vm = Vm::new();
//! vm.execute(&chunk).unwrap();
//! assert_eq!(vm.stack(), &[7.0]);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use machine::{Vm, DEFAULT_STACK_LIMIT};
