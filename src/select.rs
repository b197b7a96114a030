//! Release selection
//!
//! Asks the zigtools release API which ZLS build is fully compatible with a
//! given Zig version. The answer is a JSON object keyed by platform
//! (`"x86_64-linux"`, `"aarch64-macos"`, ...) mixed with a few scalar
//! fields such as `version` and `date`.

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::http::HttpClient;
use crate::platform::PlatformKey;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// One downloadable build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactRecord {
    #[serde(rename = "tarball")]
    pub tarball_url: String,
    pub shasum: String,
    #[serde(deserialize_with = "size_from_number_or_string")]
    pub size: u64,
}

/// Builds of one release, keyed by platform.
///
/// Object-valued entries are kept raw and decoded on lookup, so a malformed
/// record for some other platform never gets in the way, while a malformed
/// record for the requested one is reported as a decode failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSet {
    /// ZLS version the server picked, when it reports one.
    pub version: Option<String>,
    source: String,
    entries: BTreeMap<String, serde_json::Value>,
}

impl ArtifactSet {
    /// Split a select-version response fetched from `source` into platform
    /// entries. Scalar fields (`date`, `version`, ...) are not platforms.
    pub fn from_json(source: impl Into<String>, value: serde_json::Value) -> Self {
        let mut set = Self {
            source: source.into(),
            ..Self::default()
        };
        let serde_json::Value::Object(map) = value else {
            return set;
        };

        for (key, entry) in map {
            if key == "version" {
                set.version = entry.as_str().map(str::to_owned);
            } else if entry.is_object() {
                set.entries.insert(key, entry);
            }
        }
        set
    }

    /// Platform keys present in the response.
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Record for `key`, or an error naming the key and the requested Zig version.
    pub fn require(&self, key: &PlatformKey, zig_version: &str) -> Result<ArtifactRecord> {
        let entry = self
            .entries
            .get(key.as_str())
            .ok_or_else(|| Error::PlatformUnsupported {
                key: key.to_string(),
                version: zig_version.to_string(),
            })?;

        serde_json::from_value(entry.clone()).map_err(|e| Error::Decode {
            url: self.source.clone(),
            detail: format!("artifact '{}': {}", key, e),
        })
    }
}

/// URL of the selection endpoint for `zig_version`. The version is not validated.
pub fn select_version_url(config: &Config, zig_version: &str) -> String {
    format!(
        "{}/v1/zls/select-version?zig_version={}&compatibility=full",
        config.releases_url, zig_version
    )
}

/// Query the builds matching `zig_version`.
pub fn query_version(client: &HttpClient, config: &Config, zig_version: &str) -> Result<ArtifactSet> {
    let url = select_version_url(config, zig_version);
    let value: serde_json::Value = client.get_json(&url)?;
    Ok(ArtifactSet::from_json(url, value))
}

fn size_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Number(u64),
        Text(String),
    }

    match Size::deserialize(deserializer)? {
        Size::Number(n) => Ok(n),
        Size::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
