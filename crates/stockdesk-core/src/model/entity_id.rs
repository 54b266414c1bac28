// ── Core identity type ──
//
// The content API is not consistent about identifiers: older resources
// carry numeric ids, newer ones UUIDs, and a few lookup collections are
// keyed by slug. EntityId unifies all three behind one opaque value;
// stores never inspect it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical identifier for any Stockdesk entity.
///
/// Consumers treat this as opaque: selection slots accept any variant
/// and no store validates that an id refers to a held item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Num(u64),
    Uuid(Uuid),
    Slug(String),
}

impl EntityId {
    pub fn as_num(&self) -> Option<u64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_slug(&self) -> Option<&str> {
        match self {
            Self::Slug(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Slug(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for EntityId {
    fn from(n: u64) -> Self {
        Self::Num(n)
    }
}

impl From<Uuid> for EntityId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        if let Ok(n) = s.parse::<u64>() {
            return Self::Num(n);
        }
        match Uuid::parse_str(&s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Slug(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}
