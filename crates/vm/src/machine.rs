//! VM state: the persistent evaluation stack and its depth discipline.

use crate::error::RuntimeError;

/// Default evaluation stack limit, in slots.
pub const DEFAULT_STACK_LIMIT: usize = 64;

/// The postcalc stack machine.
///
/// Owns the evaluation stack, which deliberately persists across
/// [`execute`](Vm::execute) calls: a value left by one line is visible to
/// the next. The stack limit is fixed at construction; exceeding it is the
/// same fatal class of error as underflow, never a silent grow.
#[derive(Debug)]
pub struct Vm {
    stack: Vec<f64>,
    limit: usize,
}

impl Vm {
    /// Create a VM with the default stack limit.
    pub fn new() -> Self {
        Self::with_stack_limit(DEFAULT_STACK_LIMIT)
    }

    /// Create a VM with an explicit stack limit.
    pub fn with_stack_limit(limit: usize) -> Self {
        Self {
            stack: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Push a value, checking the limit. `at` is the current unit index,
    /// carried into the error.
    pub(crate) fn push(&mut self, value: f64, at: usize) -> Result<(), RuntimeError> {
        if self.stack.len() >= self.limit {
            return Err(RuntimeError::StackOverflow {
                at,
                limit: self.limit,
            });
        }
        self.stack.push(value);
        Ok(())
    }

    /// Pop the top value.
    pub(crate) fn pop(&mut self, at: usize) -> Result<f64, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { at })
    }

    /// Read the top value without popping.
    pub(crate) fn peek(&self, at: usize) -> Result<f64, RuntimeError> {
        self.stack
            .last()
            .copied()
            .ok_or(RuntimeError::StackUnderflow { at })
    }

    /// Pop the top two values as `(a, b)` where `b` was on top.
    ///
    /// Checks depth up front so an underflow leaves the stack untouched.
    pub(crate) fn pop_pair(&mut self, at: usize) -> Result<(f64, f64), RuntimeError> {
        if self.stack.len() < 2 {
            return Err(RuntimeError::StackUnderflow { at });
        }
        let b = self.stack.pop().expect("depth checked");
        let a = self.stack.pop().expect("depth checked");
        Ok((a, b))
    }

    /// Exchange the top two values.
    pub(crate) fn swap(&mut self, at: usize) -> Result<(), RuntimeError> {
        let len = self.stack.len();
        if len < 2 {
            return Err(RuntimeError::StackUnderflow { at });
        }
        self.stack.swap(len - 1, len - 2);
        Ok(())
    }

    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The stack contents, bottom first.
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// The configured stack limit.
    pub fn stack_limit(&self) -> usize {
        self.limit
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
