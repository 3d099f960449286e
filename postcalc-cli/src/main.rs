//! postcalc CLI — compile and execute postfix lines from stdin.
//!
//! Exit codes:
//! - 0: Success (every line compiled and executed, no failed assert)
//! - 1: Compile error or bad usage
//! - 2: Assertion failure
//! - 3: Fatal VM error (stack underflow/overflow, malformed chunk)

use std::io;
use std::process;

use postcalc_cli::{driver, Options};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--trace" | "-t" => opts.trace = true,
            "--stack-limit" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse::<usize>().ok()) {
                    Some(n) if n > 0 => opts.stack_limit = n,
                    _ => {
                        eprintln!("error: --stack-limit requires a positive integer");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("error: unknown option '{other}'");
                eprintln!();
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let stdin = io::stdin();
    if let Err(code) = driver::run(stdin.lock(), &opts) {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: postcalc [options] < input");
    eprintln!();
    eprintln!("Reads postfix lines from stdin and executes them.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --trace        Dump each compiled chunk and the stack to stderr");
    eprintln!("  --stack-limit N    Evaluation stack capacity in slots (default 64)");
    eprintln!("  -h, --help         Show this help");
}
