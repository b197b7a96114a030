//! Host platform detection
//!
//! Release metadata is keyed by `"{arch}-{os}"` using Zig's target names.
//! [`PlatformKey::from_parts`] is the pure mapping; [`PlatformKey::host`]
//! feeds it the names reported by the running kernel.

use std::fmt;

const OS_MAPPING: &[(&str, &str)] = &[("darwin", "macos")];

const ARCH_MAPPING: &[(&str, &str)] = &[
    ("i386", "x86"),
    ("i686", "x86"),
    ("amd64", "x86_64"),
    ("arm64", "aarch64"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformKey(String);

impl PlatformKey {
    /// Build a key from raw OS and machine names, e.g. `("Darwin", "arm64")`.
    pub fn from_parts(os: &str, arch: &str) -> Self {
        let os = normalize(os, OS_MAPPING);
        let arch = normalize(arch, ARCH_MAPPING);
        Self(format!("{}-{}", arch, os))
    }

    /// Key for the machine this process runs on.
    pub fn host() -> Self {
        let (os, arch) = host_names();
        Self::from_parts(&os, &arch)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(name: &str, table: &[(&str, &str)]) -> String {
    let name = name.to_lowercase();
    table
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| to.to_string())
        .unwrap_or(name)
}

/// Kernel-reported OS and machine names (`uname -s`, `uname -m`).
#[cfg(unix)]
fn host_names() -> (String, String) {
    use std::ffi::CStr;

    let mut uts = std::mem::MaybeUninit::<libc::utsname>::zeroed();
    // SAFETY: uname only writes into the provided struct.
    let rc = unsafe { libc::uname(uts.as_mut_ptr()) };
    if rc != 0 {
        return compile_target_names();
    }
    // SAFETY: uname returned 0, so every field holds a NUL-terminated string.
    let uts = unsafe { uts.assume_init() };
    let field = |raw: &[libc::c_char]| {
        // SAFETY: see above.
        unsafe { CStr::from_ptr(raw.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    };

    (field(&uts.sysname), field(&uts.machine))
}

#[cfg(not(unix))]
fn host_names() -> (String, String) {
    compile_target_names()
}

fn compile_target_names() -> (String, String) {
    (
        std::env::consts::OS.to_string(),
        std::env::consts::ARCH.to_string(),
    )
}
