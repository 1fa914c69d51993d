//! Newtypes and parsers for registry identifiers.
//!
//! Both tokens share the same wire grammar: 1..=64 chars drawn from
//! `[A-Za-z0-9_.:-]`. Party ids are the keys of `Results` and of each
//! district's `weighing` table; district ids key the `Districts` map.

use crate::errors::CoreError;
use core::fmt;
use core::str::FromStr;

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 64
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

/// Stable key identifying a competing party (e.g. `"mdg"`, `"ap"`).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct PartyId(String);

impl PartyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartyId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_token(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidId)
        }
    }
}

impl TryFrom<String> for PartyId {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_token(&s) {
            Ok(Self(s))
        } else {
            Err(CoreError::InvalidId)
        }
    }
}

impl From<PartyId> for String {
    fn from(id: PartyId) -> String {
        id.0
    }
}

/// Stable key identifying an electoral district (e.g. `"14"`, `"oslo"`).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DistrictId(String);

impl DistrictId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DistrictId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_token(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidId)
        }
    }
}

impl TryFrom<String> for DistrictId {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_token(&s) {
            Ok(Self(s))
        } else {
            Err(CoreError::InvalidId)
        }
    }
}

impl From<DistrictId> for String {
    fn from(id: DistrictId) -> String {
        id.0
    }
}
