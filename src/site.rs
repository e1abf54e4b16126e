//! Site configuration data model.
//!
//! A `SiteConfig` holds the settings for one test-suite run. The harness
//! creates it, the binder populates it, the loader continues filling it from
//! the companion script, and the harness tears it down afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The mutable configuration object for one suite run.
///
/// The four path fields are opaque tokens at this layer: they are assigned
/// verbatim and never validated here. `extras` collects whatever the
/// delegated calls register (platform facts, companion parameters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Tool directory path (e.g., where the suite's helper binaries live)
    #[serde(default)]
    pub tools_dir: String,

    /// Shared-library suffix token (".so", ".dylib", ".dll")
    #[serde(default)]
    pub shlib_ext: String,

    /// Shared-library output directory path
    #[serde(default)]
    pub shlib_dir: String,

    /// Test execution root directory path
    #[serde(default)]
    pub exec_root: String,

    /// Keys registered by the delegated calls (ordered for stable output)
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
}

impl SiteConfig {
    /// Create an empty, unconfigured site config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a site config from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse site config TOML")
    }

    /// Load a site config from a TOML file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config at {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Serialize to TOML (the on-disk site file format).
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize site config to TOML")
    }

    /// Serialize to pretty JSON (machine-readable display).
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize site config to JSON")
    }

    /// Write the site config to a TOML file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_toml_string()?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write site config to {}", path.display()))
    }
}

/// The four pre-resolved substitution values handed to the binder.
///
/// Opaque strings: the producer (build scripts, CI, flags) owns any format
/// constraints. Empty values are legal and bind verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteValues {
    /// Tool directory path
    pub tools_dir: String,
    /// Shared-library suffix token
    pub shlib_ext: String,
    /// Shared-library output directory path
    pub shlib_dir: String,
    /// Test execution root directory path
    pub exec_root: String,
}

impl SiteValues {
    /// Create site values from the four substitution strings.
    pub fn new(
        tools_dir: impl Into<String>,
        shlib_ext: impl Into<String>,
        shlib_dir: impl Into<String>,
        exec_root: impl Into<String>,
    ) -> Self {
        Self {
            tools_dir: tools_dir.into(),
            shlib_ext: shlib_ext.into(),
            shlib_dir: shlib_dir.into(),
            exec_root: exec_root.into(),
        }
    }
}

/// Ambient test-runtime context passed to the delegated initialization call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    /// Suite name reported by the harness
    pub suite: String,

    /// Runtime parameters (e.g., feature toggles set by the harness)
    pub params: BTreeMap<String, String>,
}

impl RunContext {
    /// Create a run context for the named suite.
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a runtime parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconfigured() {
        let config = SiteConfig::new();
        assert!(config.tools_dir.is_empty());
        assert!(config.shlib_ext.is_empty());
        assert!(config.shlib_dir.is_empty());
        assert!(config.exec_root.is_empty());
        assert!(config.extras.is_empty());
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let mut config = SiteConfig::new();
        config.tools_dir = "/opt/llvm/bin".to_string();
        config.shlib_ext = ".so".to_string();
        config.shlib_dir = "/opt/llvm/lib".to_string();
        config.exec_root = "/tmp/build/tests".to_string();
        config
            .extras
            .insert("platform_os".to_string(), "linux".to_string());

        let text = config.to_toml_string().unwrap();
        let parsed = SiteConfig::parse(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn parse_tolerates_missing_fields() {
        let config = SiteConfig::parse("tools_dir = \"/usr/bin\"\n").unwrap();
        assert_eq!(config.tools_dir, "/usr/bin");
        assert!(config.shlib_ext.is_empty());
        assert!(config.extras.is_empty());
    }

    #[test]
    fn save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("site.toml");

        let mut config = SiteConfig::new();
        config.exec_root = "/tmp/exec".to_string();
        config.save_to(&path).unwrap();

        let loaded = SiteConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn run_context_params() {
        let ctx = RunContext::new("unit").with_param("mode", "fast");
        assert_eq!(ctx.suite, "unit");
        assert_eq!(ctx.params.get("mode").map(String::as_str), Some("fast"));
    }
}
