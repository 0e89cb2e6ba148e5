//! Decode command.
//!
//! Decoding is best-effort: inputs that are not resource ids (for example
//! `mailto:` addresses of external attendees) are reported per row and do
//! not fail the command unless `--strict` is given.

use std::io::BufRead;

use anyhow::{Context, Result};
use caldav_resid::ResourceId;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, print_warning, OutputFormat};

use super::CommandContext;

/// Decode resource identifiers.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// URIs to decode. Use `-` to read one URI per line from stdin.
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<String>,

    /// Fail if any input is not a resource identifier.
    #[arg(long)]
    strict: bool,
}

/// One decoded input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct DecodedRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Context", display = "display_option_i32")]
    context_id: Option<i32>,

    #[tabled(rename = "Entity", display = "display_option_i32")]
    entity_id: Option<i32>,

    #[tabled(rename = "Type", display = "display_option")]
    calendar_user_type: Option<String>,

    #[tabled(rename = "Gen", display = "display_option_u8")]
    generation: Option<u8>,

    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

fn display_option_i32(opt: &Option<i32>) -> String {
    opt.map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn display_option_u8(opt: &Option<u8>) -> String {
    opt.map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let inputs = if self.inputs.len() == 1 && self.inputs[0] == "-" {
            read_stdin_inputs()?
        } else {
            self.inputs
        };

        let rows: Vec<DecodedRow> = inputs.iter().map(|input| decode_row(input)).collect();
        let unrecognized = rows.iter().filter(|row| row.error.is_some()).count();

        print_output(&rows, ctx.format);

        if unrecognized > 0 {
            if ctx.format == OutputFormat::Table {
                print_warning(&format!(
                    "{unrecognized} of {} input(s) are not resource identifiers",
                    rows.len()
                ));
            }
            if self.strict {
                return Err(CliError::UnrecognizedInputs {
                    count: unrecognized,
                }
                .into());
            }
        }
        Ok(())
    }
}

fn read_stdin_inputs() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut inputs = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    tracing::debug!(count = inputs.len(), "read inputs from stdin");
    Ok(inputs)
}

fn decode_row(input: &str) -> DecodedRow {
    match ResourceId::parse_with_generation(input) {
        Ok((id, generation)) => {
            tracing::debug!(input, generation = generation.number(), "decoded resource id");
            DecodedRow {
                input: input.to_string(),
                context_id: Some(id.context_id()),
                entity_id: Some(id.entity_id()),
                calendar_user_type: Some(id.calendar_user_type().to_string()),
                generation: Some(generation.number()),
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(input, error = %e, "not a resource identifier");
            DecodedRow {
                input: input.to_string(),
                context_id: None,
                entity_id: None,
                calendar_user_type: None,
                generation: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_row_current() {
        let row = decode_row("urn:uuid:00000011-0000-002a-00fc-c0e11e000001");
        assert_eq!(row.context_id, Some(17));
        assert_eq!(row.entity_id, Some(42));
        assert_eq!(row.calendar_user_type.as_deref(), Some("INDIVIDUAL"));
        assert_eq!(row.generation, Some(2));
        assert!(row.error.is_none());
    }

    #[test]
    fn test_decode_row_legacy() {
        let row = decode_row("uuid:00000000-0011-0003-0000-00000000002a");
        assert_eq!(row.context_id, Some(17));
        assert_eq!(row.entity_id, Some(42));
        assert_eq!(row.calendar_user_type.as_deref(), Some("RESOURCE"));
        assert_eq!(row.generation, Some(1));
    }

    #[test]
    fn test_decode_row_foreign_address() {
        let row = decode_row("mailto:someone@example.com");
        assert_eq!(row.context_id, None);
        assert_eq!(row.generation, None);
        assert!(row.error.is_some());
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(display_option(&None), "-");
        assert_eq!(display_option_i32(&Some(-3)), "-3");
        assert_eq!(display_option_u8(&None), "-");
    }
}
