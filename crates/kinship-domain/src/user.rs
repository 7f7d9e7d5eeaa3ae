//! User module - group members as seen by the resolver

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user based on UUIDv7
///
/// Serialized as the canonical hyphenated UUID string so snapshots read
/// the same way the persistence layer writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(u128);

impl UserId {
    /// Generate a new UUIDv7-based UserId
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::UserId;
    ///
    /// let id = UserId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a UserId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a UserId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::UserId;
    ///
    /// let id = UserId::new();
    /// let parsed = UserId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid user id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl std::str::FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.to_string()
    }
}

/// Gender recorded on a user profile
///
/// An unset gender is modelled as `Option<Gender>::None` and, like
/// `NonBinary`, keeps kinship labels neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,

    /// Non-binary
    NonBinary,
}

impl Gender {
    /// Get the gender code as stored by the profile service
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non_binary",
        }
    }

    /// Parse a gender code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "non_binary" | "non-binary" | "nonbinary" => Some(Gender::NonBinary),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

/// A user profile, reduced to what kinship resolution needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Gender, if the user has set one
    #[serde(default)]
    pub gender: Option<Gender>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Create a user with an optional gender and no display name
    pub fn new(id: UserId, gender: Option<Gender>) -> Self {
        Self {
            id,
            gender,
            name: None,
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to show for this user, falling back to the id
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: ordering of ids matches ordering of the raw values
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = UserId::from_value(a);
            let id_b = UserId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: the string form parses back to the same id
        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = UserId::from_value(value);

            match UserId::from_string(&id.to_string()) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }
    }
}
