//! Inspect command.

use anyhow::Result;
use caldav_resid::codec::{self, Generation};
use caldav_resid::{CalendarUserType, ResourceId};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

/// Inspect a resource identifier.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// URI to inspect.
    input: String,
}

/// Bit-level view of an identifier.
#[derive(Debug, Serialize)]
struct Inspection {
    input: String,
    generation: Generation,
    most_significant_bits: String,
    least_significant_bits: String,
    context_id: i32,
    entity_id: i32,
    calendar_user_type: CalendarUserType,
    canonical_uri: String,
    canonical: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct Field {
    #[tabled(rename = "Field")]
    field: &'static str,

    #[tabled(rename = "Value")]
    value: String,
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let inspection = inspect(&self.input)?;

        match ctx.format {
            OutputFormat::Table => print_output(&inspection.fields(), ctx.format),
            OutputFormat::Json => print_single(&inspection),
        }
        Ok(())
    }
}

fn inspect(input: &str) -> Result<Inspection> {
    let uuid = codec::parse_uri(input).map_err(|e| CliError::not_a_resource_id(input, e))?;
    let id = ResourceId::from_uuid(&uuid);
    let (msb, lsb) = uuid.as_u64_pair();
    let generation = codec::classify_generation(&uuid);
    let canonical = id.uuid() == uuid;

    if !canonical {
        tracing::info!(
            input,
            generation = generation.number(),
            canonical_uri = %id.uri(),
            "identifier is not in canonical form"
        );
    }

    Ok(Inspection {
        input: input.to_string(),
        generation,
        most_significant_bits: format!("{msb:#018x}"),
        least_significant_bits: format!("{lsb:#018x}"),
        context_id: id.context_id(),
        entity_id: id.entity_id(),
        calendar_user_type: id.calendar_user_type(),
        canonical_uri: id.uri(),
        canonical,
    })
}

impl Inspection {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field {
                field: "Generation",
                value: self.generation.to_string(),
            },
            Field {
                field: "MSB",
                value: self.most_significant_bits.clone(),
            },
            Field {
                field: "LSB",
                value: self.least_significant_bits.clone(),
            },
            Field {
                field: "Context",
                value: self.context_id.to_string(),
            },
            Field {
                field: "Entity",
                value: self.entity_id.to_string(),
            },
            Field {
                field: "Type",
                value: self.calendar_user_type.to_string(),
            },
            Field {
                field: "Canonical URI",
                value: self.canonical_uri.clone(),
            },
            Field {
                field: "Canonical",
                value: if self.canonical { "yes" } else { "no" }.to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_current() {
        let out = inspect("urn:uuid:00000011-0000-002a-00fc-c0e11e000001").unwrap();
        assert_eq!(out.generation, Generation::Current);
        assert_eq!(out.most_significant_bits, "0x000000110000002a");
        assert_eq!(out.least_significant_bits, "0x00fcc0e11e000001");
        assert!(out.canonical);
    }

    #[test]
    fn test_inspect_legacy_offers_canonical_uri() {
        let out = inspect("00000000-0011-0002-0000-00000000002a").unwrap();
        assert_eq!(out.generation, Generation::Legacy);
        assert_eq!(out.calendar_user_type, CalendarUserType::Group);
        assert!(!out.canonical);
        assert_eq!(
            out.canonical_uri,
            "urn:uuid:00000011-0000-002a-00fc-c0e11e000002"
        );
    }

    #[test]
    fn test_inspect_rejects_foreign_uri() {
        let err = inspect("mailto:someone@example.com").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotAResourceId { .. })
        ));
    }

    #[test]
    fn test_fields_table() {
        let out = inspect("urn:uuid:00000011-0000-002a-00fc-c0e11e000001").unwrap();
        let fields = out.fields();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0].value, "2");
    }
}
