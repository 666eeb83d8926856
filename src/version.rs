//! Dotted numeric version strings.
//!
//! Release versions follow a `MAJOR.MINOR.PATCH`-style convention. Parsing is a
//! shape check only; ordering is by numeric component so downstream consumers
//! can compare releases without re-parsing.
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered dotted numeric version such as `2.3.99`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DottedVersion {
    components: Vec<u64>,
}

/// Parse failure for a version string that does not match the dotted shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a dotted numeric version: {raw:?}")]
pub struct ParseVersionError {
    raw: String,
}

impl FromStr for DottedVersion {
    type Err = ParseVersionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseVersionError {
            raw: raw.to_string(),
        };
        if raw.trim().is_empty() {
            return Err(malformed());
        }
        let components = raw
            .split('.')
            .map(|part| part.parse::<u64>().map_err(|_| malformed()))
            .collect::<Result<Vec<u64>, ParseVersionError>>()?;
        Ok(DottedVersion { components })
    }
}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .components
            .iter()
            .map(|component| component.to_string())
            .collect::<Vec<String>>()
            .join(".");
        f.write_str(&rendered)
    }
}

impl Serialize for DottedVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
