//! Prebuilt ZLS release resolver for the asdf version manager
//!
//! Lists the versions published in the zigtools build index, asks the
//! release API which ZLS build matches a Zig version, and downloads the
//! tarball for the current host while verifying its SHA-256.
//!
//! # Commands
//!
//! - `all-versions` - every version in the index, ascending, space separated
//! - `latest-version` - the newest version in the index
//! - `download <zig-version> <out-file>` - fetch and verify the matching build
//!
//! # Configuration
//!
//! - `ASDF_ZLS_INDEX_URL` - version index (default `https://builds.zigtools.org/index.json`)
//! - `ASDF_ZLS_HTTP_TIMEOUT` - per-request timeout in seconds (default 30)
//!
//! # Example
//!
//! ```no_run
//! use asdf_zls::{config::Config, http::HttpClient, index};
//!
//! let config = Config::default();
//! let client = HttpClient::from_config(&config);
//! let versions = index::all_versions(&index::fetch_index(&client, &config)?)?;
//! println!("{}", versions.join(" "));
//! # Ok::<(), asdf_zls::Error>(())
//! ```

mod core;

pub mod commands;
pub mod download;
pub mod http;
pub mod index;
pub mod platform;
pub mod select;

pub use crate::core::error::{Error, Result};
pub use crate::core::{config, error, output};
