//! Persisted identity and role types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Account role of the logged-in user.
///
/// The persisted record stores the role as a free-form string; decoding is
/// total, so a string this build has never seen becomes [`Role::Unknown`]
/// instead of a decode error. Routing gives unknown roles the student
/// experience rather than an error screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
    Landlord,
    FoodProvider,
    /// Any persisted role string this build does not recognize.
    Unknown,
}

impl Role {
    /// Decode a persisted role string. Total: unrecognized values map to
    /// [`Role::Unknown`].
    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "student" => Role::Student,
            "landlord" => Role::Landlord,
            "food_provider" => Role::FoodProvider,
            _ => Role::Unknown,
        }
    }

    /// Canonical wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Landlord => "landlord",
            Role::FoodProvider => "food_provider",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Role::parse(&s))
    }
}

/// The locally stored record identifying the logged-in user.
///
/// Written by the auth flow after login; this crate only reads it. The role
/// is the one field a record must carry to count as well-formed — it drives
/// launch routing. Everything else is profile data the screens render and
/// passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedIdentity {
    /// Backend identifier; shape owned by the auth flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Account role; required.
    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Remaining profile fields, preserved as-is.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}
