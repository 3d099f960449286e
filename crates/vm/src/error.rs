//! Runtime errors for the postcalc VM.
//!
//! Every variant includes the op-stream unit index (`at`) for debugging.
//! The fatal variants indicate a broken invariant between the compiler and
//! the VM; a correct compiler never produces a chunk that triggers them.
//! [`AssertionFailed`](RuntimeError::AssertionFailed) is the one
//! user-triggered failure.

use postcalc_common::RawOp;
use thiserror::Error;

/// Errors that occur during chunk execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A popping or peeking opcode found too few values on the stack.
    #[error("stack underflow at unit {at}")]
    StackUnderflow { at: usize },

    /// A push would exceed the configured stack limit.
    #[error("stack overflow (limit {limit}) at unit {at}")]
    StackOverflow { at: usize, limit: usize },

    /// A raw unit outside the known opcode set.
    #[error("unknown opcode {raw} at unit {at}")]
    UnknownOpcode { at: usize, raw: RawOp },

    /// A `Push` at the end of the stream with no operand unit.
    #[error("truncated push at unit {at}")]
    TruncatedPush { at: usize },

    /// A `Push` operand named a slot beyond the constant pool.
    #[error("constant slot {slot} out of range (pool size {len}) at unit {at}")]
    ConstantOutOfRange { at: usize, slot: usize, len: usize },

    /// `assert` saw `0.0` on top of the stack.
    #[error("assertion failed at unit {at}")]
    AssertionFailed { at: usize },
}

impl RuntimeError {
    /// True for invariant violations that should abort the whole run.
    ///
    /// Assertion failure is the exception: it fails the line, not the
    /// process.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RuntimeError::AssertionFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::StackUnderflow { at: 3 }.to_string(),
            "stack underflow at unit 3"
        );
        assert_eq!(
            RuntimeError::StackOverflow { at: 0, limit: 64 }.to_string(),
            "stack overflow (limit 64) at unit 0"
        );
        assert_eq!(
            RuntimeError::UnknownOpcode { at: 2, raw: 99 }.to_string(),
            "unknown opcode 99 at unit 2"
        );
        assert_eq!(
            RuntimeError::ConstantOutOfRange { at: 1, slot: 5, len: 2 }.to_string(),
            "constant slot 5 out of range (pool size 2) at unit 1"
        );
    }

    #[test]
    fn only_assertion_failure_is_non_fatal() {
        assert!(!RuntimeError::AssertionFailed { at: 0 }.is_fatal());
        assert!(RuntimeError::StackUnderflow { at: 0 }.is_fatal());
        assert!(RuntimeError::StackOverflow { at: 0, limit: 64 }.is_fatal());
        assert!(RuntimeError::UnknownOpcode { at: 0, raw: 10 }.is_fatal());
        assert!(RuntimeError::TruncatedPush { at: 0 }.is_fatal());
        assert!(RuntimeError::ConstantOutOfRange { at: 0, slot: 0, len: 0 }.is_fatal());
    }
}
