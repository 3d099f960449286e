//! Decode errors for postcalc op streams.

use thiserror::Error;

use crate::RawOp;

/// Errors that occur while decoding raw instruction units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Raw unit does not name any opcode.
    #[error("unknown opcode: {0}")]
    UnknownOpcode(RawOp),
}
