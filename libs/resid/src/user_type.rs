//! Calendar user types (RFC 5545 `CUTYPE`).

use std::fmt;
use std::str::FromStr;

/// The kind of calendar user an address refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarUserType {
    /// An individual user.
    #[default]
    Individual,
    /// A group of calendar users.
    Group,
    /// A physical resource.
    Resource,
    /// A room resource.
    Room,
    /// Type not known.
    Unknown,
}

/// Wire code shared by every type without a dedicated code.
const UNKNOWN_CODE: i32 = -1;

impl CalendarUserType {
    /// All variants, in declaration order.
    pub const ALL: [CalendarUserType; 5] = [
        CalendarUserType::Individual,
        CalendarUserType::Group,
        CalendarUserType::Resource,
        CalendarUserType::Room,
        CalendarUserType::Unknown,
    ];

    /// Returns the RFC 5545 token for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CalendarUserType::Individual => "INDIVIDUAL",
            CalendarUserType::Group => "GROUP",
            CalendarUserType::Resource => "RESOURCE",
            CalendarUserType::Room => "ROOM",
            CalendarUserType::Unknown => "UNKNOWN",
        }
    }

    /// Maps an RFC 5545 token to a type, case-insensitively.
    ///
    /// Unrecognized tokens (including `X-` names) map to `Unknown`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(token.trim()))
            .unwrap_or(CalendarUserType::Unknown)
    }

    /// Code packed into an encoded identifier.
    pub(crate) const fn code(&self) -> i32 {
        match self {
            CalendarUserType::Individual => 1,
            CalendarUserType::Group => 2,
            CalendarUserType::Resource => 3,
            CalendarUserType::Room | CalendarUserType::Unknown => UNKNOWN_CODE,
        }
    }

    /// Inverse of [`code`](Self::code); any other value is `Unknown`.
    pub(crate) const fn from_code(code: i32) -> Self {
        match code {
            1 => CalendarUserType::Individual,
            2 => CalendarUserType::Group,
            3 => CalendarUserType::Resource,
            _ => CalendarUserType::Unknown,
        }
    }
}

impl fmt::Display for CalendarUserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarUserType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl serde::Serialize for CalendarUserType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarUserType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_token(&s))
    }
}
