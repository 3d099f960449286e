//! The line-driver loop: read, compile, execute, reset, repeat.

use std::io::{self, BufRead};

use postcalc_common::Chunk;
use postcalc_compiler::compile;
use postcalc_vm::{Vm, DEFAULT_STACK_LIMIT};

use crate::trace;

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// Dump each compiled chunk and the resulting stack to stderr.
    pub trace: bool,
    /// Evaluation stack capacity, in slots.
    pub stack_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            trace: false,
            stack_limit: DEFAULT_STACK_LIMIT,
        }
    }
}

/// Process `input` line by line until EOF or first failure.
///
/// One chunk and one VM are reused for the whole run: the chunk is reset
/// after each line, the VM's stack persists across lines. Lines are read
/// with the trailing newline intact — the compiler needs that terminating
/// whitespace to finish the line's last token.
///
/// Failures are reported on stderr; the returned error is the process exit
/// code (1 compile error, 2 assertion failure, 3 fatal VM error).
pub fn run(mut input: impl BufRead, opts: &Options) -> Result<(), i32> {
    let mut chunk = Chunk::new();
    let mut vm = Vm::with_stack_limit(opts.stack_limit);
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        let read = input.read_line(&mut line).map_err(|e| {
            eprintln!("error: cannot read input: {e}");
            1
        })?;
        if read == 0 {
            return Ok(());
        }
        line_no += 1;

        if let Err(e) = compile(&line, &mut chunk) {
            eprintln!("compile error: line {line_no}: {e}");
            return Err(1);
        }
        if opts.trace {
            let _ = trace::dump_chunk(&mut io::stderr().lock(), &chunk);
        }

        if let Err(e) = vm.execute(&chunk) {
            if e.is_fatal() {
                eprintln!("fatal: line {line_no}: {e}");
                return Err(3);
            }
            eprintln!("line {line_no}: {e}");
            return Err(2);
        }
        if opts.trace {
            let _ = trace::dump_stack(&mut io::stderr().lock(), &vm);
        }

        chunk.reset();
    }
}
