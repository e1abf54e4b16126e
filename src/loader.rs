//! Configuration loader protocol.
//!
//! The binder delegates to an external collaborator through two named
//! operations: a capability-registration call and a continuation call that
//! keeps configuring from a companion script. `TomlSiteLoader` is the
//! implementation shipped with this tool; harnesses can substitute their own.

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::platform;
use crate::site::{RunContext, SiteConfig};

/// Errors that can occur while loading the companion script
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Companion script not found at {path}")]
    MissingCompanion { path: String },

    #[error("Failed to read companion script at {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse companion script at {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// External configuration-loading facility.
///
/// Both operations mutate the shared config; their failure modes are owned
/// by the implementation, not by the binder that invokes them.
pub trait SiteLoader {
    /// Capability registration: let the platform-integration layer register
    /// itself against the run context and the config under construction.
    fn initialize(&mut self, ctx: &RunContext, config: &mut SiteConfig) -> Result<()>;

    /// Continuation: keep configuring from the companion script at `script`.
    fn load_config(&mut self, config: &mut SiteConfig, script: &Path) -> Result<()>;
}

/// Companion script contents (TOML).
///
/// ```toml
/// [site]
/// exec_root = "/tmp/override"
///
/// [params]
/// timeout = "60"
/// ```
#[derive(Debug, Default, Deserialize)]
struct CompanionScript {
    #[serde(default)]
    site: SiteOverrides,

    #[serde(default)]
    params: BTreeMap<String, String>,
}

/// Optional overrides for the four bound path fields.
#[derive(Debug, Default, Deserialize)]
struct SiteOverrides {
    #[serde(default)]
    tools_dir: Option<String>,
    #[serde(default)]
    shlib_ext: Option<String>,
    #[serde(default)]
    shlib_dir: Option<String>,
    #[serde(default)]
    exec_root: Option<String>,
}

/// The loader shipped with this tool: registers platform facts, then merges
/// the companion TOML script into the config.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlSiteLoader;

impl TomlSiteLoader {
    /// Create a new TOML loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn parse_companion(path: &Path) -> Result<CompanionScript, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::MissingCompanion {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|source| LoaderError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| LoaderError::ParseError {
            path: path.display().to_string(),
            source,
        })
    }
}

impl SiteLoader for TomlSiteLoader {
    fn initialize(&mut self, ctx: &RunContext, config: &mut SiteConfig) -> Result<()> {
        crate::debug!("registering platform integration for suite '{}'", ctx.suite);

        config
            .extras
            .insert("suite".to_string(), ctx.suite.clone());
        config
            .extras
            .insert("platform_os".to_string(), env::consts::OS.to_string());
        config
            .extras
            .insert("platform_arch".to_string(), env::consts::ARCH.to_string());
        config.extras.insert(
            "platform_shlib_ext".to_string(),
            platform::shlib_suffix().to_string(),
        );

        for (key, value) in &ctx.params {
            config.extras.insert(key.clone(), value.clone());
        }

        Ok(())
    }

    fn load_config(&mut self, config: &mut SiteConfig, script: &Path) -> Result<()> {
        crate::debug!("loading companion script {}", script.display());

        let companion = Self::parse_companion(script)?;

        // A set-but-empty override is ignored so a sparse companion cannot
        // silently blank a bound field.
        if let Some(tools_dir) = companion.site.tools_dir
            && !tools_dir.is_empty()
        {
            config.tools_dir = tools_dir;
        }
        if let Some(shlib_ext) = companion.site.shlib_ext
            && !shlib_ext.is_empty()
        {
            config.shlib_ext = shlib_ext;
        }
        if let Some(shlib_dir) = companion.site.shlib_dir
            && !shlib_dir.is_empty()
        {
            config.shlib_dir = shlib_dir;
        }
        if let Some(exec_root) = companion.site.exec_root
            && !exec_root.is_empty()
        {
            config.exec_root = exec_root;
        }

        // Companion parameters win on collision: the load call runs after
        // initialization in the protocol.
        for (key, value) in companion.params {
            config.extras.insert(key, value);
        }

        Ok(())
    }
}
