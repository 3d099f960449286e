//! postcalc line compiler — postfix source text to bytecode chunks.
//!
//! One call compiles one line: literals become `Push` instructions backed by
//! the chunk's constant pool, keywords become bare opcodes. The chunk is
//! meant to be reused across lines (compile, execute, [`Chunk::reset`],
//! repeat).
//!
//! # Usage
//!
//! ```
//! use postcalc_common::Chunk;
//! use postcalc_compiler::compile;
//!
//! let mut chunk = Chunk::new();
//! compile("3 4 +\n", &mut chunk).unwrap();
//! assert_eq!(chunk.len(), 5); // PUSH 0, PUSH 1, ADD
//! ```
//!
//! # Trailing-token quirk
//!
//! A token is only finished by whitespace, so a line must end with
//! whitespace (normally its newline) for its last token to be emitted.
//! `"3 4 +"` compiles the two pushes and silently drops the `+`. Callers
//! reading line input should keep the trailing newline.

pub mod error;
mod scan;

pub use error::CompileError;

use postcalc_common::Chunk;

/// Compile one line of postfix source into `chunk`.
///
/// Appends to whatever the chunk already holds. On error the chunk is
/// rolled back to its state at entry, so a failed line leaves no partial
/// instructions behind.
///
/// # Errors
///
/// Returns [`CompileError`] for an unclassifiable character or a word that
/// matches no keyword.
pub fn compile(line: &str, chunk: &mut Chunk) -> Result<(), CompileError> {
    let mark = chunk.checkpoint();
    scan::scan(line, chunk).inspect_err(|_| chunk.truncate(mark))
}
