//! Bit layout of encoded resource identifiers.
//!
//! Two layouts exist on the wire. Neither carries a version tag; the
//! generation is recovered from the structure of the least significant
//! half of the UUID.
//!
//! ## Generation 2 (current)
//!
//! ```text
//! msb: [ context_id : 32 ][ entity_id : 32 ]
//! lsb: MAGIC | (type_code & 0xFFFF_FFFF)
//! ```
//!
//! ## Generation 1 (legacy, decode only)
//!
//! ```text
//! msb: [ context_id : 48 ][ type_code : 16 ]
//! lsb: [ 0 : 32 ][ entity_id : 32 ]
//! ```
//!
//! `MAGIC` has non-zero bits above bit 32, so a generation 2 UUID never
//! has an all-zero upper `lsb` word.

use uuid::Uuid;

use crate::{CalendarUserType, ResourceId};

/// Marker mixed into the least significant half of generation 2 identifiers.
pub const MAGIC: i64 = 4_240_498_974 << 24;

/// Preferred URI prefix.
pub const URN_PREFIX: &str = "urn:uuid:";

/// Short prefix accepted when parsing.
pub const UUID_PREFIX: &str = "uuid:";

/// Length of the hyphenated UUID text form.
const HYPHENATED_LEN: usize = 36;

/// Encoding generation of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    /// Generation 1: 48-bit context and 16-bit type code in the high word.
    Legacy,
    /// Generation 2: the layout produced by [`encode`].
    Current,
}

impl Generation {
    /// Returns the generation number (1 or 2).
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Generation::Legacy => 1,
            Generation::Current => 2,
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Splits a UUID into its signed most/least significant halves.
#[must_use]
pub fn signed_halves(uuid: &Uuid) -> (i64, i64) {
    let (msb, lsb) = uuid.as_u64_pair();
    (msb as i64, lsb as i64)
}

/// Encodes a triple using the current (generation 2) layout.
#[must_use]
pub fn encode(
    context_id: i32,
    entity_id: i32,
    calendar_user_type: CalendarUserType,
) -> Uuid {
    let msb = (i64::from(context_id) << 32) | i64::from(entity_id as u32);
    let lsb = MAGIC | (i64::from(calendar_user_type.code()) & 0xFFFF_FFFF);
    Uuid::from_u64_pair(msb as u64, lsb as u64)
}

/// Decides which layout a UUID uses.
#[must_use]
pub fn classify_generation(uuid: &Uuid) -> Generation {
    let (_, lsb) = uuid.as_u64_pair();
    if lsb >> 32 == 0 {
        Generation::Legacy
    } else {
        Generation::Current
    }
}

/// Decodes a UUID in the generation 1 layout.
///
/// The shift is arithmetic: a set top bit yields a negative context id.
#[must_use]
pub fn decode_generation1(uuid: &Uuid) -> ResourceId {
    let (msb, lsb) = signed_halves(uuid);
    let shifted = msb >> 16;
    let context_id = shifted as i32;
    let code = msb.wrapping_sub(shifted << 16) as i32;
    let entity_id = lsb as i32;
    ResourceId::new(context_id, entity_id, CalendarUserType::from_code(code))
}

/// Decodes a UUID in the generation 2 layout.
#[must_use]
pub fn decode_generation2(uuid: &Uuid) -> ResourceId {
    let (msb, lsb) = signed_halves(uuid);
    let context_id = (msb >> 32) as i32;
    let entity_id = msb as i32;
    let code = lsb.wrapping_sub(MAGIC) as i32;
    ResourceId::new(context_id, entity_id, CalendarUserType::from_code(code))
}

/// Decodes a UUID of either generation.
#[must_use]
pub fn decode(uuid: &Uuid) -> ResourceId {
    match classify_generation(uuid) {
        Generation::Legacy => decode_generation1(uuid),
        Generation::Current => decode_generation2(uuid),
    }
}

/// Removes a leading `urn:uuid:` or, failing that, `uuid:` prefix.
#[must_use]
pub fn strip_uri_prefix(uri: &str) -> &str {
    uri.strip_prefix(URN_PREFIX)
        .or_else(|| uri.strip_prefix(UUID_PREFIX))
        .unwrap_or(uri)
}

/// Parses the hyphenated UUID text following an optional URI prefix.
///
/// This only checks the syntax; any UUID decodes to some resource id.
pub fn parse_uri(uri: &str) -> Result<Uuid, crate::ResourceIdError> {
    let text = strip_uri_prefix(uri);
    if text.is_empty() {
        return Err(crate::ResourceIdError::Empty);
    }

    if text.len() != HYPHENATED_LEN {
        return Err(crate::ResourceIdError::InvalidUuid {
            input: text.to_string(),
            reason: format!("expected {HYPHENATED_LEN} characters, got {}", text.len()),
        });
    }

    Uuid::try_parse(text).map_err(|e| crate::ResourceIdError::InvalidUuid {
        input: text.to_string(),
        reason: e.to_string(),
    })
}
