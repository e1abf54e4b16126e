//! `SITECFG_*` environment variable handling.
//!
//! Environment values sit between the defaults file and explicit CLI flags:
//! they override the former and are overridden by the latter.

use std::env;

// Helper for boolean environment variables that accept "1", "true", "yes"
fn is_enabled(var: &str) -> bool {
    env::var(var).ok().is_some_and(|s| {
        let s = s.to_lowercase();
        s == "1" || s == "true" || s == "yes"
    })
}

/// Get the site file path override (`SITECFG_SITE_FILE`).
pub fn site_file() -> Option<String> {
    env::var("SITECFG_SITE_FILE").ok()
}

/// Get the tool directory override (`SITECFG_TOOLS_DIR`).
pub fn tools_dir() -> Option<String> {
    env::var("SITECFG_TOOLS_DIR").ok()
}

/// Get the shared-library suffix override (`SITECFG_SHLIB_EXT`).
pub fn shlib_ext() -> Option<String> {
    env::var("SITECFG_SHLIB_EXT").ok()
}

/// Get the shared-library directory override (`SITECFG_SHLIB_DIR`).
pub fn shlib_dir() -> Option<String> {
    env::var("SITECFG_SHLIB_DIR").ok()
}

/// Get the execution root override (`SITECFG_EXEC_ROOT`).
pub fn exec_root() -> Option<String> {
    env::var("SITECFG_EXEC_ROOT").ok()
}

/// Check if debug logging is enabled (`SITECFG_DEBUG`).
pub fn debug() -> bool {
    is_enabled("SITECFG_DEBUG")
}
