// tokscan-cli/src/lib.rs

pub mod cli;

pub use cli::{run, Cli, OutputFormat, Report};
