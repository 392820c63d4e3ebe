//! CLI argument definitions and value types.

pub mod args;
pub mod types;

pub use args::*;
