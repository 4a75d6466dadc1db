//! Command line interface for the tokdist binary.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
