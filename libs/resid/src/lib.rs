//! # caldav-resid
//!
//! Resource identifiers for internal calendar users.
//!
//! A calendar server needs a stable calendar user address for every
//! internal user, group and resource. Instead of storing a lookup table,
//! the address packs the identity itself:
//!
//! - the context (tenant) id
//! - the entity id inside that context
//! - the calendar user type (RFC 5545 `CUTYPE`)
//!
//! into a UUID, rendered as a `urn:uuid:` URI.
//!
//! ## Example
//!
//! ```
//! use caldav_resid::{CalendarUserType, ResourceId};
//!
//! let id = ResourceId::for_user(17, 42);
//! let uri = id.uri();
//! assert_eq!(uri, "urn:uuid:00000011-0000-002a-00fc-c0e11e000001");
//!
//! let parsed = ResourceId::parse(&uri).unwrap();
//! assert_eq!(parsed.calendar_user_type(), CalendarUserType::Individual);
//!
//! // Foreign addresses are simply "not ours".
//! assert!(ResourceId::parse("mailto:someone@example.com").is_none());
//! ```
//!
//! ## Encoding generations
//!
//! Only the current layout is produced. An older layout is still decoded;
//! see [`codec`] for both bit layouts.

pub mod codec;
mod error;
mod resource_id;
mod user_type;

pub use codec::Generation;
pub use error::ResourceIdError;
pub use resource_id::ResourceId;
pub use user_type::CalendarUserType;

/// Re-export uuid for consumers that work with raw UUIDs
pub use uuid::Uuid;
