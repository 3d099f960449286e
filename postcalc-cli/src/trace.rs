//! Human-readable dumps of compiled chunks and VM stacks.
//!
//! A troubleshooting aid, enabled by `--trace`; nothing in the core depends
//! on this rendering. Ops are shown as mnemonics with `PUSH` carrying its
//! pool slot:
//!
//! ```text
//! OPS: PUSH 0 PUSH 1 ADD
//! VALUES: 3 4
//! STACK: 7
//! ```

use std::io::{self, Write};

use postcalc_common::{Chunk, Opcode};
use postcalc_vm::Vm;

/// Write the chunk's op stream and constant pool as two lines.
pub fn dump_chunk(w: &mut impl Write, chunk: &Chunk) -> io::Result<()> {
    write!(w, "OPS:")?;
    let ops = chunk.ops();
    let mut i = 0;
    while i < ops.len() {
        match Opcode::try_from(ops[i]) {
            Ok(op) => {
                write!(w, " {}", op.mnemonic())?;
                if op.has_operand() && i + 1 < ops.len() {
                    i += 1;
                    write!(w, " {}", ops[i])?;
                }
            }
            // Unknown units render raw so a malformed stream is visible.
            Err(_) => write!(w, " ?{}", ops[i])?,
        }
        i += 1;
    }
    writeln!(w)?;

    write!(w, "VALUES:")?;
    for value in chunk.constants().values() {
        write!(w, " {value}")?;
    }
    writeln!(w)
}

/// Write the VM stack as one line, bottom first.
pub fn dump_stack(w: &mut impl Write, vm: &Vm) -> io::Result<()> {
    if vm.stack().is_empty() {
        return writeln!(w, "STACK: empty");
    }
    write!(w, "STACK:")?;
    for value in vm.stack() {
        write!(w, " {value}")?;
    }
    writeln!(w)
}
