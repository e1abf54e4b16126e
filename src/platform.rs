//! Platform detection for shared-library suffixes.
//!
//! Maps the running (or a named) operating system to its dynamic-library
//! file extension token: ".so" on Linux and most Unixes, ".dylib" on macOS,
//! ".dll" on Windows.

use std::env;
use std::sync::LazyLock;

/// Cached suffix for the running platform (computed once, reused throughout
/// execution)
static CURRENT_SUFFIX: LazyLock<&'static str> = LazyLock::new(|| shlib_suffix_for(env::consts::OS));

/// Shared-library suffix for the running platform.
///
/// Uses a cached result: detected once on first call, reused afterwards.
#[must_use]
pub fn shlib_suffix() -> &'static str {
    *CURRENT_SUFFIX
}

/// Shared-library suffix for a named OS token (as in `std::env::consts::OS`).
/// Unknown tokens fall back to ".so", the common ELF convention.
#[must_use]
pub fn shlib_suffix_for(os: &str) -> &'static str {
    match os {
        "macos" | "ios" => ".dylib",
        "windows" => ".dll",
        _ => ".so",
    }
}
