//! Error types for the postcalc line compiler.

use thiserror::Error;

/// Errors produced while compiling one line of source text.
///
/// `col` is the zero-based byte offset into the line: the offending
/// character for `UnexpectedChar`, the token start for `UnknownWord`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A character that is not a digit, letter, punctuation, or whitespace.
    #[error("column {col}: unexpected character '{ch}'")]
    UnexpectedChar { col: usize, ch: char },

    /// A word token that matches no keyword.
    #[error("column {col}: unknown word '{word}'")]
    UnknownWord { col: usize, word: String },
}
