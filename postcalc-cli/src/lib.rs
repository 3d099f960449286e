//! Library surface of the postcalc CLI: the line-driver loop and the trace
//! dumps. The `postcalc` binary is a thin argument parser over these.

pub mod driver;
pub mod trace;

pub use driver::{run, Options};
