//! Command dispatch
//!
//! The three commands asdf invokes. Anything else clap hands back as an
//! external subcommand and is rejected here with [`Error::UnknownCommand`].

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::download;
use crate::http::HttpClient;
use crate::index;
use crate::platform::PlatformKey;
use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// List all ZLS versions, oldest first, space separated
    #[default]
    AllVersions,

    /// Print the newest ZLS version
    LatestVersion,

    /// Download and verify the ZLS build compatible with a Zig version
    Download {
        /// Zig version to select a ZLS build for
        version: String,

        /// Where to write the tarball
        out_file: PathBuf,
    },

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Execute `command`, writing listings to `out`.
pub fn run(command: &Command, config: &Config, out: &mut impl Write) -> Result<()> {
    let client = HttpClient::from_config(config);

    match command {
        Command::AllVersions => {
            let index = index::fetch_index(&client, config)?;
            let versions = index::all_versions(&index)?;
            writeln!(out, "{}", versions.join(" "))?;
        }

        Command::LatestVersion => {
            let index = index::fetch_index(&client, config)?;
            writeln!(out, "{}", index::latest_version(&index)?)?;
        }

        Command::Download { version, out_file } => {
            download::download(&client, config, version, out_file, &PlatformKey::host())?;
        }

        Command::Unknown(args) => {
            return Err(Error::UnknownCommand {
                name: args.first().cloned().unwrap_or_default(),
            });
        }
    }

    Ok(())
}
