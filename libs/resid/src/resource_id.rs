//! The resource identifier value type.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::codec::{self, Generation, URN_PREFIX};
use crate::{CalendarUserType, ResourceIdError};

/// Identifies an internal calendar user (user, group or resource) of a context.
///
/// Externally a resource id is rendered as a `urn:uuid:` URI, e.g. as the
/// address of an attendee. Two ids are equal when context id, entity id
/// and calendar user type are all equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId {
    context_id: i32,
    entity_id: i32,
    calendar_user_type: CalendarUserType,
}

impl ResourceId {
    /// Creates a resource id from its parts.
    #[must_use]
    pub const fn new(
        context_id: i32,
        entity_id: i32,
        calendar_user_type: CalendarUserType,
    ) -> Self {
        Self {
            context_id,
            entity_id,
            calendar_user_type,
        }
    }

    /// Resource id of an internal user.
    #[must_use]
    pub const fn for_user(context_id: i32, user_id: i32) -> Self {
        Self::new(context_id, user_id, CalendarUserType::Individual)
    }

    /// Resource id of a group.
    #[must_use]
    pub const fn for_group(context_id: i32, group_id: i32) -> Self {
        Self::new(context_id, group_id, CalendarUserType::Group)
    }

    /// Resource id of a resource.
    #[must_use]
    pub const fn for_resource(context_id: i32, resource_id: i32) -> Self {
        Self::new(context_id, resource_id, CalendarUserType::Resource)
    }

    /// Returns a copy with a different calendar user type.
    #[must_use]
    pub const fn with_calendar_user_type(self, calendar_user_type: CalendarUserType) -> Self {
        Self {
            calendar_user_type,
            ..self
        }
    }

    /// The owning context.
    #[must_use]
    pub const fn context_id(&self) -> i32 {
        self.context_id
    }

    /// The user, group or resource id inside the context.
    #[must_use]
    pub const fn entity_id(&self) -> i32 {
        self.entity_id
    }

    /// The calendar user type.
    #[must_use]
    pub const fn calendar_user_type(&self) -> CalendarUserType {
        self.calendar_user_type
    }

    /// Encodes this id as a UUID (current layout).
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        codec::encode(self.context_id, self.entity_id, self.calendar_user_type)
    }

    /// Returns the `urn:uuid:` URI for this id.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("{URN_PREFIX}{}", self.uuid())
    }

    /// Decodes a UUID of either layout.
    #[must_use]
    pub fn from_uuid(uuid: &Uuid) -> Self {
        codec::decode(uuid)
    }

    /// Parses a resource id, reporting why the input is not one.
    ///
    /// Accepts `urn:uuid:<uuid>`, `uuid:<uuid>` or a bare hyphenated UUID.
    pub fn try_parse(uri: &str) -> Result<Self, ResourceIdError> {
        codec::parse_uri(uri).map(|uuid| Self::from_uuid(&uuid))
    }

    /// Interprets a URI as a resource id.
    ///
    /// Returns `None` for anything that is not a UUID URI; such input is
    /// usually a foreign address (e.g. `mailto:`) and callers should fall
    /// back to another interpretation.
    #[must_use]
    pub fn parse(uri: &str) -> Option<Self> {
        Self::try_parse(uri).ok()
    }

    /// Returns true if `uri` parses as a resource id.
    #[must_use]
    pub fn is_resource_id(uri: &str) -> bool {
        codec::parse_uri(uri).is_ok()
    }

    /// Parses a URI and reports which layout it was encoded with.
    pub fn parse_with_generation(uri: &str) -> Result<(Self, Generation), ResourceIdError> {
        let uuid = codec::parse_uri(uri)?;
        Ok((Self::from_uuid(&uuid), codec::classify_generation(&uuid)))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{URN_PREFIX}{}", self.uuid())
    }
}

impl FromStr for ResourceId {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl From<ResourceId> for Uuid {
    fn from(id: ResourceId) -> Self {
        id.uuid()
    }
}

impl From<Uuid> for ResourceId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(&uuid)
    }
}

impl serde::Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.uri())
    }
}

impl<'de> serde::Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_parse(&s).map_err(serde::de::Error::custom)
    }
}
