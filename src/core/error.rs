//! Error types shared by every command.

use thiserror::Error;

/// Errors that can occur while resolving, downloading or verifying a release.
#[derive(Error, Debug)]
pub enum Error {
    /// Server answered with an error status and a JSON body carrying `message`.
    #[error("{message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    #[error("{url} access failed, code:{status}, reason:{reason}, body:{body}")]
    Http {
        url: String,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("request to {url} failed: {detail}")]
    Transport { url: String, detail: String },

    #[error("invalid JSON from {url}: {detail}")]
    Decode { url: String, detail: String },

    #[error("invalid version '{version}': expected dot-separated integers")]
    InvalidVersion { version: String },

    #[error("version index contains no versions")]
    EmptyIndex,

    #[error("No tarball link for {key} in {version}")]
    PlatformUnsupported { key: String, version: String },

    #[error("shasum mismatch, expected: {expected}, actual: {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
