//! Command-line interface.

mod args;
pub mod generate;
pub mod serve;

pub use args::{Cli, Commands};
