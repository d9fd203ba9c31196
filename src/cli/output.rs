//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

use crate::cli::error::CliResult;
use crate::infrastructure::InfraError;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Write one plain line (no color, for data output)
pub fn line(out: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) -> CliResult<()> {
    writeln!(out, "{}", msg).map_err(|e| InfraError::io("write output", e))?;
    Ok(())
}

/// Write each entry on its own line
pub fn lines<S: AsRef<str>>(out: &mut dyn Write, entries: &[S]) -> CliResult<()> {
    for entry in entries {
        line(out, entry.as_ref())?;
    }
    Ok(())
}
