//! Execution loop and opcode dispatch for the postcalc VM.

use postcalc_common::{Chunk, DecodeError, Opcode};

use crate::error::RuntimeError;
use crate::machine::Vm;

impl Vm {
    /// Execute every instruction in `chunk`, start to end.
    ///
    /// The op stream has no branching, so this is a single linear scan.
    /// `Push` consumes the following operand unit; every other opcode is
    /// one unit.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`]. Stack underflow/overflow and malformed
    /// streams are fatal ([`RuntimeError::is_fatal`]); a failed `assert`
    /// stops the chunk but leaves the VM usable.
    pub fn execute(&mut self, chunk: &Chunk) -> Result<(), RuntimeError> {
        let ops = chunk.ops();
        let mut at = 0;

        while at < ops.len() {
            let op = Opcode::try_from(ops[at])
                .map_err(|DecodeError::UnknownOpcode(raw)| RuntimeError::UnknownOpcode { at, raw })?;

            match op {
                Opcode::Push => {
                    let slot = *ops
                        .get(at + 1)
                        .ok_or(RuntimeError::TruncatedPush { at })?
                        as usize;
                    let value =
                        chunk
                            .constants()
                            .get(slot)
                            .ok_or(RuntimeError::ConstantOutOfRange {
                                at,
                                slot,
                                len: chunk.constants().len(),
                            })?;
                    self.push(value, at)?;
                    // Skip the operand unit.
                    at += 2;
                    continue;
                }
                Opcode::Pop => {
                    self.pop(at)?;
                }
                Opcode::Dup => {
                    let top = self.peek(at)?;
                    self.push(top, at)?;
                }
                Opcode::Swap => self.swap(at)?,
                Opcode::Assert => {
                    // Inspects without popping; 0.0 is the only falsy value.
                    if self.peek(at)? == 0.0 {
                        return Err(RuntimeError::AssertionFailed { at });
                    }
                }
                Opcode::Add => self.binary(at, |a, b| a + b)?,
                Opcode::Subtract => self.binary(at, |a, b| a - b)?,
                Opcode::Divide => self.binary(at, |a, b| a / b)?,
                Opcode::Multiply => self.binary(at, |a, b| a * b)?,
                Opcode::Equal => {
                    // Exact native comparison, no epsilon.
                    self.binary(at, |a, b| if a == b { 1.0 } else { 0.0 })?
                }
            }

            at += 1;
        }

        Ok(())
    }

    /// Pop `b` then `a`, push `f(a, b)`. Net depth change is -1, so the
    /// push cannot overflow.
    fn binary(&mut self, at: usize, f: impl FnOnce(f64, f64) -> f64) -> Result<(), RuntimeError> {
        let (a, b) = self.pop_pair(at)?;
        self.push(f(a, b), at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcalc_common::RawOp;

    fn run_ops(vm: &mut Vm, build: impl FnOnce(&mut Chunk)) -> Result<(), RuntimeError> {
        let mut chunk = Chunk::new();
        build(&mut chunk);
        vm.execute(&chunk)
    }

    #[test]
    fn push_reads_operand_and_pool() {
        let mut vm = Vm::new();
        run_ops(&mut vm, |c| {
            c.emit_push(3.0);
            c.emit_push(4.0);
        })
        .unwrap();
        assert_eq!(vm.stack(), &[3.0, 4.0]);
    }

    #[test]
    fn binary_ops_use_operand_order() {
        let mut vm = Vm::new();
        run_ops(&mut vm, |c| {
            c.emit_push(10.0);
            c.emit_push(4.0);
            c.emit(Opcode::Subtract);
        })
        .unwrap();
        assert_eq!(vm.stack(), &[6.0]);
    }

    #[test]
    fn division_by_zero_is_ieee() {
        let mut vm = Vm::new();
        run_ops(&mut vm, |c| {
            c.emit_push(1.0);
            c.emit_push(0.0);
            c.emit(Opcode::Divide);
        })
        .unwrap();
        assert_eq!(vm.stack(), &[f64::INFINITY]);
    }

    #[test]
    fn unknown_opcode_unit_is_fatal() {
        let mut vm = Vm::new();
        let mut chunk = Chunk::new();
        chunk.emit_push(1.0);
        chunk.emit_raw(99 as RawOp);
        let err = vm.execute(&chunk).unwrap_err();
        assert_eq!(err, RuntimeError::UnknownOpcode { at: 2, raw: 99 });
        assert!(err.is_fatal());
    }

    #[test]
    fn truncated_push_is_fatal() {
        let mut vm = Vm::new();
        let mut chunk = Chunk::new();
        chunk.emit_raw(Opcode::Push as RawOp);
        assert_eq!(
            vm.execute(&chunk),
            Err(RuntimeError::TruncatedPush { at: 0 })
        );
    }

    #[test]
    fn constant_out_of_range_is_fatal() {
        let mut vm = Vm::new();
        let mut chunk = Chunk::new();
        chunk.emit_raw(Opcode::Push as RawOp);
        chunk.emit_raw(3);
        assert_eq!(
            vm.execute(&chunk),
            Err(RuntimeError::ConstantOutOfRange {
                at: 0,
                slot: 3,
                len: 0
            })
        );
    }

    #[test]
    fn assert_failure_stops_mid_chunk() {
        let mut vm = Vm::new();
        let err = run_ops(&mut vm, |c| {
            c.emit_push(0.0);
            c.emit(Opcode::Assert);
            c.emit_push(5.0);
        })
        .unwrap_err();
        assert_eq!(err, RuntimeError::AssertionFailed { at: 2 });
        // The push after the failed assert never ran; assert did not pop.
        assert_eq!(vm.stack(), &[0.0]);
    }
}
