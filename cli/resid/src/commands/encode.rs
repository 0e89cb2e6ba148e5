//! Encode command.

use anyhow::Result;
use caldav_resid::{CalendarUserType, Generation, ResourceId};
use clap::Args;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Encode a resource identifier.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Context id.
    #[arg(long, allow_negative_numbers = true)]
    context: i32,

    /// User, group or resource id inside the context.
    #[arg(long, allow_negative_numbers = true)]
    entity: i32,

    /// Calendar user type (INDIVIDUAL, GROUP, RESOURCE, ROOM, UNKNOWN).
    #[arg(long = "type")]
    cutype: Option<String>,
}

/// Encoded identifier as printed in JSON mode.
#[derive(Debug, Serialize)]
struct EncodedId {
    uri: String,
    uuid: String,
    context_id: i32,
    entity_id: i32,
    calendar_user_type: CalendarUserType,
    generation: u8,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let cutype = self.calendar_user_type(ctx);
        let id = ResourceId::new(self.context, self.entity, cutype);

        if !matches!(
            cutype,
            CalendarUserType::Individual | CalendarUserType::Group | CalendarUserType::Resource
        ) {
            tracing::warn!(
                calendar_user_type = %cutype,
                "type has no dedicated code and decodes as UNKNOWN"
            );
        }

        tracing::info!(
            context_id = id.context_id(),
            entity_id = id.entity_id(),
            calendar_user_type = %cutype,
            "encoded resource id"
        );

        match ctx.format {
            OutputFormat::Table => println!("{}", id.uri()),
            OutputFormat::Json => print_single(&encoded(&id)),
        }
        Ok(())
    }

    fn calendar_user_type(&self, ctx: &CommandContext) -> CalendarUserType {
        match self.cutype.as_deref() {
            Some(token) => {
                let cutype = CalendarUserType::from_token(token);
                if cutype == CalendarUserType::Unknown && !token.eq_ignore_ascii_case("unknown") {
                    tracing::warn!(token, "unrecognized calendar user type, using UNKNOWN");
                }
                cutype
            }
            None => ctx.config.default_type,
        }
    }
}

fn encoded(id: &ResourceId) -> EncodedId {
    EncodedId {
        uri: id.uri(),
        uuid: id.uuid().to_string(),
        context_id: id.context_id(),
        entity_id: id.entity_id(),
        calendar_user_type: id.calendar_user_type(),
        generation: Generation::Current.number(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx(default_type: CalendarUserType) -> CommandContext {
        CommandContext {
            config: Config {
                default_type,
                format: None,
            },
            format: OutputFormat::Json,
        }
    }

    fn command(cutype: Option<&str>) -> EncodeCommand {
        EncodeCommand {
            context: 17,
            entity: 42,
            cutype: cutype.map(str::to_string),
        }
    }

    #[test]
    fn test_type_defaults_to_config() {
        let cmd = command(None);
        assert_eq!(
            cmd.calendar_user_type(&ctx(CalendarUserType::Group)),
            CalendarUserType::Group
        );
    }

    #[test]
    fn test_type_flag_overrides_config() {
        let cmd = command(Some("resource"));
        assert_eq!(
            cmd.calendar_user_type(&ctx(CalendarUserType::Group)),
            CalendarUserType::Resource
        );
    }

    #[test]
    fn test_unrecognized_type_is_unknown() {
        let cmd = command(Some("x-robot"));
        assert_eq!(
            cmd.calendar_user_type(&ctx(CalendarUserType::Individual)),
            CalendarUserType::Unknown
        );
    }

    #[test]
    fn test_encoded_fields() {
        let out = encoded(&ResourceId::for_user(17, 42));
        assert_eq!(out.uri, "urn:uuid:00000011-0000-002a-00fc-c0e11e000001");
        assert_eq!(out.uuid, "00000011-0000-002a-00fc-c0e11e000001");
        assert_eq!(out.generation, 2);
        assert_eq!(out.calendar_user_type, CalendarUserType::Individual);
    }
}
