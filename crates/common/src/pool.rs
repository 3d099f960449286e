//! Constant pool: per-line literal storage referenced by slot index.

/// Default initial capacity, in values.
const INITIAL_CAPACITY: usize = 8;

/// An ordered, append-only store of `f64` literals.
///
/// Slots are stable for the lifetime of one compiled line. The pool is
/// reset (emptied without releasing storage) between lines so a long
/// session reuses its allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantPool {
    values: Vec<f64>,
}

impl ConstantPool {
    /// Create an empty pool with a small pre-sized allocation.
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append a value, returning its slot index.
    pub fn push(&mut self, value: f64) -> usize {
        let slot = self.values.len();
        self.values.push(value);
        slot
    }

    /// Fetch the value at `slot`, or `None` if the slot is out of range.
    ///
    /// Out-of-range slots never occur in chunks built through
    /// [`Chunk::emit_push`]; the VM treats a miss as fatal.
    ///
    /// [`Chunk::emit_push`]: crate::Chunk::emit_push
    pub fn get(&self, slot: usize) -> Option<f64> {
        self.values.get(slot).copied()
    }

    /// Empty the pool, retaining its backing storage.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Drop values from `len` onward. Used by compile-error rollback.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.values.truncate(len);
    }

    /// Number of values in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the pool holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, in slot order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Default for ConstantPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_sequential_slots() {
        let mut pool = ConstantPool::new();
        assert_eq!(pool.push(1.5), 0);
        assert_eq!(pool.push(2.5), 1);
        assert_eq!(pool.push(3.5), 2);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn get_returns_pushed_values() {
        let mut pool = ConstantPool::new();
        let a = pool.push(4.0);
        let b = pool.push(-0.5);
        assert_eq!(pool.get(a), Some(4.0));
        assert_eq!(pool.get(b), Some(-0.5));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut pool = ConstantPool::new();
        pool.push(1.0);
        assert_eq!(pool.get(1), None);
        assert_eq!(pool.get(usize::MAX), None);
    }

    #[test]
    fn reset_empties_but_keeps_capacity() {
        let mut pool = ConstantPool::new();
        for i in 0..20 {
            pool.push(i as f64);
        }
        let cap = pool.values.capacity();
        pool.reset();
        assert!(pool.is_empty());
        assert_eq!(pool.values.capacity(), cap);
        // Slots restart at zero after reset.
        assert_eq!(pool.push(7.0), 0);
    }

    #[test]
    fn growth_past_initial_capacity_preserves_entries() {
        let mut pool = ConstantPool::new();
        for i in 0..100 {
            pool.push(i as f64 * 0.25);
        }
        for i in 0..100 {
            assert_eq!(pool.get(i), Some(i as f64 * 0.25));
        }
    }
}
