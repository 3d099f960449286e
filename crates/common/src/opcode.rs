//! Opcode definitions for the postcalc instruction set.

use crate::error::DecodeError;
use crate::RawOp;

/// Identifies the operation to perform.
///
/// The `#[repr(u8)]` attribute keeps each variant's discriminant stable;
/// discriminants double as the raw unit encoding in a [`Chunk`] op stream.
///
/// [`Chunk`]: crate::Chunk
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push a constant onto the evaluation stack. The only opcode with an
    /// operand: the next raw unit in the stream is a constant-pool slot.
    Push = 0,
    /// Discard the top of the stack.
    Pop = 1,
    /// Push a copy of the top of the stack.
    Dup = 2,
    /// Exchange the top two stack values.
    Swap = 3,
    /// Inspect the top of the stack without popping; `0.0` fails the line.
    Assert = 4,
    /// Pop two values, push their sum.
    Add = 5,
    /// Pop two values, push (second popped - first popped).
    Subtract = 6,
    /// Pop two values, push (second popped / first popped). IEEE-754
    /// semantics: division by zero yields an infinity or NaN.
    Divide = 7,
    /// Pop two values, push their product.
    Multiply = 8,
    /// Pop two values, push `1.0` if exactly equal else `0.0`.
    Equal = 9,
}

/// All valid opcodes, in discriminant order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 10] = [
    Opcode::Push,
    Opcode::Pop,
    Opcode::Dup,
    Opcode::Swap,
    Opcode::Assert,
    Opcode::Add,
    Opcode::Subtract,
    Opcode::Divide,
    Opcode::Multiply,
    Opcode::Equal,
];

impl TryFrom<RawOp> for Opcode {
    type Error = DecodeError;

    fn try_from(raw: RawOp) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Opcode::Push),
            1 => Ok(Opcode::Pop),
            2 => Ok(Opcode::Dup),
            3 => Ok(Opcode::Swap),
            4 => Ok(Opcode::Assert),
            5 => Ok(Opcode::Add),
            6 => Ok(Opcode::Subtract),
            7 => Ok(Opcode::Divide),
            8 => Ok(Opcode::Multiply),
            9 => Ok(Opcode::Equal),
            _ => Err(DecodeError::UnknownOpcode(raw)),
        }
    }
}

impl Opcode {
    /// Look up an opcode by its source-language keyword.
    ///
    /// The match is exact: case-sensitive and full-length, so `"po"` and
    /// `"POP"` both miss. `Push` has no keyword and is never returned.
    pub fn from_keyword(word: &str) -> Option<Opcode> {
        match word {
            "pop" => Some(Opcode::Pop),
            "dup" => Some(Opcode::Dup),
            "swap" => Some(Opcode::Swap),
            "assert" => Some(Opcode::Assert),
            "+" => Some(Opcode::Add),
            "-" => Some(Opcode::Subtract),
            "/" => Some(Opcode::Divide),
            "*" => Some(Opcode::Multiply),
            "=" => Some(Opcode::Equal),
            _ => None,
        }
    }

    /// The source-language spelling, if any. `Push` is emitted only for
    /// numeric literals and has no keyword.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Opcode::Push => None,
            Opcode::Pop => Some("pop"),
            Opcode::Dup => Some("dup"),
            Opcode::Swap => Some("swap"),
            Opcode::Assert => Some("assert"),
            Opcode::Add => Some("+"),
            Opcode::Subtract => Some("-"),
            Opcode::Divide => Some("/"),
            Opcode::Multiply => Some("*"),
            Opcode::Equal => Some("="),
        }
    }

    /// True if this opcode is followed by an operand unit in the op stream.
    pub fn has_operand(&self) -> bool {
        matches!(self, Opcode::Push)
    }

    /// Returns an uppercase mnemonic for diagnostics and trace dumps.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Dup => "DUP",
            Opcode::Swap => "SWAP",
            Opcode::Assert => "ASSERT",
            Opcode::Add => "ADD",
            Opcode::Subtract => "SUB",
            Opcode::Divide => "DIV",
            Opcode::Multiply => "MUL",
            Opcode::Equal => "EQ",
        }
    }
}
