//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod render;

pub use args::{ApiArgs, Cli, Commands, ConfigCommands, OutputType};
pub use commands::{build_request, execute_command, ApiRequest};
pub use error::{CliError, CliResult};
