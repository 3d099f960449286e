//! Three-state scanner that tokenizes and emits in one pass.
//!
//! The scanner walks the line left to right in one of three states:
//!
//! - **Idle** — between tokens. Whitespace is skipped; a digit opens a
//!   number token, a letter or punctuation character opens a word token.
//! - **Number** — accumulating digits and `.`. Terminating whitespace
//!   converts the token and emits `Push <slot>`.
//! - **Word** — accumulating letters and punctuation. Terminating
//!   whitespace resolves the token against the keyword table and emits the
//!   matching opcode.
//!
//! Classification is ASCII: anything that is not a digit, letter,
//! punctuation, or whitespace is a compile error. Note that `.` is
//! punctuation, so a token such as `.5` is a word, not a number.

use postcalc_common::{Chunk, Opcode};

use crate::error::CompileError;

/// Scanner state. Token states carry the byte offset of the token start.
#[derive(Clone, Copy)]
enum State {
    Idle,
    Number { start: usize },
    Word { start: usize },
}

/// Scan `line`, appending instructions and constants to `chunk`.
///
/// Emits as it goes; the caller rolls the chunk back on error.
pub(crate) fn scan(line: &str, chunk: &mut Chunk) -> Result<(), CompileError> {
    let mut state = State::Idle;

    for (col, ch) in line.char_indices() {
        match state {
            State::Idle => {
                if ch.is_ascii_digit() {
                    state = State::Number { start: col };
                } else if is_word_char(ch) {
                    state = State::Word { start: col };
                } else if !ch.is_whitespace() {
                    return Err(CompileError::UnexpectedChar { col, ch });
                }
            }
            State::Number { start } => {
                if ch.is_ascii_digit() || ch == '.' {
                    // keep accumulating
                } else if ch.is_whitespace() {
                    chunk.emit_push(number_prefix(&line[start..col]));
                    state = State::Idle;
                } else {
                    return Err(CompileError::UnexpectedChar { col, ch });
                }
            }
            State::Word { start } => {
                if is_word_char(ch) {
                    // keep accumulating
                } else if ch.is_whitespace() {
                    let word = &line[start..col];
                    match Opcode::from_keyword(word) {
                        Some(op) => chunk.emit(op),
                        None => {
                            return Err(CompileError::UnknownWord {
                                col: start,
                                word: word.to_string(),
                            });
                        }
                    }
                    state = State::Idle;
                } else {
                    return Err(CompileError::UnexpectedChar { col, ch });
                }
            }
        }
    }

    // A token still open at end of input is dropped, not emitted: only
    // whitespace finishes a token. Line input normally supplies the
    // terminating newline.
    Ok(())
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch.is_ascii_punctuation()
}

/// Convert the longest valid numeric prefix of `token`, C `atof` style.
///
/// `"1.2.3"` converts as `1.2`; a token with no usable prefix (such as
/// `"."`) converts as `0.0`. The scanner only feeds this digits and dots,
/// but the prefix rule stands on its own.
fn number_prefix(token: &str) -> f64 {
    let bytes = token.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    token[..end].parse().unwrap_or(0.0)
}
