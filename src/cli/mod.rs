//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The matrix command implementation

pub mod args;
pub mod command;

pub use args::Cli;
pub use command::MatrixCommand;
