//! Version index
//!
//! The index is a JSON object keyed by release version. Only the keys are
//! consumed: they are ordered numerically, component by component, so
//! `0.9.0` sorts before `0.10.0`.

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::http::HttpClient;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Parsed global version index: version string -> opaque metadata.
pub type VersionIndex = serde_json::Map<String, serde_json::Value>;

/// A dot-separated tuple of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    raw: String,
    parts: Vec<u64>,
}

impl Version {
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidVersion {
                version: s.to_string(),
            })?;

        Ok(Self {
            raw: s.to_string(),
            parts,
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Tuple semantics: a shorter prefix sorts first.
        self.parts.cmp(&other.parts)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Download and parse the version index.
pub fn fetch_index(client: &HttpClient, config: &Config) -> Result<VersionIndex> {
    client.get_json(&config.index_url)
}

/// All versions in the index, ascending.
pub fn all_versions(index: &VersionIndex) -> Result<Vec<String>> {
    let mut versions = index
        .keys()
        .map(|k| k.parse::<Version>())
        .collect::<Result<Vec<_>>>()?;
    versions.sort();
    Ok(versions.into_iter().map(|v| v.raw).collect())
}

/// Highest version in the index.
pub fn latest_version(index: &VersionIndex) -> Result<String> {
    all_versions(index)?.pop().ok_or(Error::EmptyIndex)
}
