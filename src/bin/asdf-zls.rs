//! asdf-zls CLI - ZLS release resolver for the asdf version manager
//!
//! Usage:
//!   asdf-zls [all-versions]                   List every ZLS version
//!   asdf-zls latest-version                   Print the newest ZLS version
//!   asdf-zls download <version> <out_file>    Fetch the build for a Zig version

use anyhow::Result;
use asdf_zls::commands::{self, Command};
use asdf_zls::config::{Config, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_INDEX_URL, DEFAULT_RELEASES_URL};
use asdf_zls::output;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "asdf-zls")]
#[command(about = "Resolve, download and verify prebuilt ZLS releases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Version index URL
    #[arg(long, global = true, env = "ASDF_ZLS_INDEX_URL", default_value = DEFAULT_INDEX_URL)]
    index_url: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, env = "ASDF_ZLS_HTTP_TIMEOUT", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    http_timeout: u64,

    /// Base URL of the release selection API
    #[arg(long, global = true, hide = true, env = "ASDF_ZLS_RELEASES_URL", default_value = DEFAULT_RELEASES_URL)]
    releases_url: String,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_index_url(&self.index_url)
            .with_releases_url(&self.releases_url)
            .with_http_timeout(Duration::from_secs(self.http_timeout))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let command = cli.command.unwrap_or_default();

    if let Command::Download { version, out_file } = &command {
        output::action(&format!(
            "Downloading zls for zig {} to {}",
            version,
            out_file.display()
        ));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&command, &config, &mut out)?;

    Ok(())
}
