//! Tarball download and verification
//!
//! The body is streamed to disk in 1 MiB chunks while a SHA-256 is computed
//! over exactly the bytes written. A digest mismatch fails the download but
//! leaves the file in place for inspection.

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::output::{self, ProgressGuard};
use crate::http::HttpClient;
use crate::platform::PlatformKey;
use crate::select;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

/// Read size for streaming downloads (1MB)
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Copy `reader` into a fresh `out_file`, hashing as it goes.
///
/// `on_chunk` is called with the running byte count after every chunk.
/// Returns the number of bytes written.
pub fn verify_stream<R: Read + ?Sized>(
    reader: &mut R,
    out_file: &Path,
    expected_shasum: &str,
    mut on_chunk: impl FnMut(u64),
) -> Result<u64> {
    let mut file = File::create(out_file)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut read_size = 0u64;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        hasher.update(&buffer[..n]);
        file.write_all(&buffer[..n])?;
        read_size += n as u64;
        on_chunk(read_size);
    }
    file.flush()?;

    let actual = hex::encode(hasher.finalize());
    let expected = expected_shasum.to_lowercase();
    if actual != expected {
        return Err(Error::ChecksumMismatch { expected, actual });
    }

    Ok(read_size)
}

/// Download `url` to `out_file` and check it against `expected_shasum`.
pub fn download_and_check(
    client: &HttpClient,
    url: &str,
    out_file: &Path,
    expected_shasum: &str,
    total_size: u64,
) -> Result<()> {
    output::detail(&format!(
        "Begin download tarball({}) from {} to {}",
        total_size,
        url,
        out_file.display()
    ));

    let mut reader = client.get_reader(url)?;

    let pb = output::download_progress(total_size);
    let _guard = ProgressGuard::new(&pb);

    // No terminal on stderr: the bar draws nothing, so report each chunk as a line.
    let hidden = pb.is_hidden();
    let result = verify_stream(&mut reader, out_file, expected_shasum, |read_size| {
        if hidden {
            output::detail(&progress_line(read_size, total_size));
        } else {
            pb.set_position(read_size);
            pb.set_message(format!(
                "({:.2}%)",
                output::percentage(read_size, total_size)
            ));
        }
    });

    let written = match result {
        Ok(written) => {
            output::progress_done(&pb);
            written
        }
        Err(e) => {
            output::progress_fail(&pb, "download failed");
            return Err(e);
        }
    };

    output::success(&format!(
        "Downloaded {} ({} bytes, sha256 ok)",
        out_file.display(),
        written
    ));
    Ok(())
}

fn progress_line(read_size: u64, total_size: u64) -> String {
    format!(
        "Downloaded: {}/{} bytes ({:.2}%)",
        read_size,
        total_size,
        output::percentage(read_size, total_size)
    )
}

/// Download the ZLS build matching `zig_version` for `platform`.
pub fn download(
    client: &HttpClient,
    config: &Config,
    zig_version: &str,
    out_file: &Path,
    platform: &PlatformKey,
) -> Result<()> {
    let artifacts = select::query_version(client, config, zig_version)?;
    if let Some(zls_version) = &artifacts.version {
        output::info(&format!("zls {} selected for zig {}", zls_version, zig_version));
    }

    let record = artifacts.require(platform, zig_version)?;
    download_and_check(
        client,
        &record.tarball_url,
        out_file,
        &record.shasum,
        record.size,
    )
}
