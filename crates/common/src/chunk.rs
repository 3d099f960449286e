//! Chunk: the compiled form of one input line.
//!
//! A chunk is a flat stream of raw instruction units plus the constant pool
//! those units reference. Most instructions are a single unit holding the
//! opcode; `Push` is followed by one operand unit holding a pool slot. The
//! interpreter decides from the opcode alone whether a trailing operand unit
//! follows.

use crate::opcode::Opcode;
use crate::pool::ConstantPool;
use crate::RawOp;

/// Default initial capacity, in instruction units.
const INITIAL_CAPACITY: usize = 32;

/// A compiled instruction stream with its owned constant pool.
///
/// Filled by the compiler, read by the VM, and reset between lines so the
/// driver loop reuses the same allocations for every line.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    ops: Vec<RawOp>,
    constants: ConstantPool,
}

/// A saved (ops, constants) length pair for compile-error rollback.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    ops: usize,
    constants: usize,
}

impl Chunk {
    /// Create an empty chunk with small pre-sized allocations.
    pub fn new() -> Self {
        Self {
            ops: Vec::with_capacity(INITIAL_CAPACITY),
            constants: ConstantPool::new(),
        }
    }

    /// Append one operandless opcode unit.
    pub fn emit(&mut self, op: Opcode) {
        debug_assert!(!op.has_operand(), "use emit_push for Push");
        self.ops.push(op as RawOp);
    }

    /// Append `value` to the constant pool and emit `Push <slot>`.
    ///
    /// This is the only way a `Push` enters a chunk, so every `Push` operand
    /// is a valid pool slot by construction. Returns the slot.
    pub fn emit_push(&mut self, value: f64) -> usize {
        let slot = self.constants.push(value);
        self.ops.push(Opcode::Push as RawOp);
        self.ops.push(slot as RawOp);
        slot
    }

    /// Append one raw unit verbatim, bypassing opcode checks.
    ///
    /// Escape hatch for tools and tests that need malformed or hand-built
    /// streams; normal emission goes through [`emit`](Self::emit) and
    /// [`emit_push`](Self::emit_push).
    pub fn emit_raw(&mut self, unit: RawOp) {
        self.ops.push(unit);
    }

    /// Truncate the op stream and pool to empty, retaining capacity.
    pub fn reset(&mut self) {
        self.ops.clear();
        self.constants.reset();
    }

    /// Record the current lengths for a later [`truncate`](Self::truncate).
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            ops: self.ops.len(),
            constants: self.constants.len(),
        }
    }

    /// Roll back everything emitted since `mark` was taken.
    pub fn truncate(&mut self, mark: Checkpoint) {
        self.ops.truncate(mark.ops);
        self.constants.truncate(mark.constants);
    }

    /// The raw instruction stream.
    pub fn ops(&self) -> &[RawOp] {
        &self.ops
    }

    /// The owned constant pool.
    pub fn constants(&self) -> &ConstantPool {
        &self.constants
    }

    /// Number of raw units in the op stream (operands included).
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the chunk holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
