//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a resource identifier: {reason}")]
    NotAResourceId { input: String, reason: String },

    #[error("{count} input(s) are not resource identifiers")]
    UnrecognizedInputs { count: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Create an error for input that failed to parse.
    pub fn not_a_resource_id(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::NotAResourceId {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::NotAResourceId { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Expected urn:uuid:<uuid>, uuid:<uuid> or a hyphenated UUID.".yellow()
                );
            }
            CliError::UnrecognizedInputs { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Drop --strict to treat foreign addresses as non-fatal.".yellow()
                );
            }
            CliError::Config(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check --config or RESID_CONFIG points to a JSON file.".yellow()
                );
            }
        }
    }
}
