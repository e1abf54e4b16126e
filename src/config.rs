//! Defaults file management
//!
//! Handles reading sitecfg's TOML defaults from project and global
//! locations, so CI checkouts can pin the four site values without passing
//! flags on every invocation.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env_vars;
use crate::platform;
use crate::site::SiteValues;

/// Defaults loaded from TOML files
///
/// Every field is optional; unset fields fall through to environment
/// variables and finally to built-in fallbacks.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Defaults {
    /// Default tool directory path
    #[serde(default)]
    pub tools_dir: Option<String>,

    /// Default shared-library suffix token
    #[serde(default)]
    pub shlib_ext: Option<String>,

    /// Default shared-library directory path
    #[serde(default)]
    pub shlib_dir: Option<String>,

    /// Default execution root directory path
    #[serde(default)]
    pub exec_root: Option<String>,

    /// Default site file path
    #[serde(default)]
    pub site_file: Option<String>,
}

impl Defaults {
    /// Load defaults from TOML files.
    /// Priority: ./.sitecfg.toml -> ~/.config/sitecfg/config.toml
    pub fn load() -> Result<Self> {
        Self::load_with_options(None, false)
    }

    /// Load defaults with custom options.
    ///
    /// # Arguments
    /// * `custom_path` - Optional custom path to a defaults file (overrides defaults)
    /// * `skip_rc` - If true, skip loading defaults files entirely
    pub fn load_with_options(custom_path: Option<&str>, skip_rc: bool) -> Result<Self> {
        if skip_rc {
            return Ok(Self::default());
        }

        // If custom path provided, load from that
        if let Some(path) = custom_path {
            return Self::load_from(path);
        }

        // Try local defaults first
        if let Ok(defaults) = Self::load_from(".sitecfg.toml") {
            return Ok(defaults);
        }

        // Try user defaults
        if let Some(config_dir) = Self::user_config_dir() {
            let config_path = config_dir.join("config.toml");
            if let Ok(defaults) = Self::load_from(&config_path) {
                return Ok(defaults);
            }
        }

        Ok(Self::default())
    }

    fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let defaults: Self = toml::from_str(&contents)?;
        Ok(defaults)
    }

    fn user_config_dir() -> Option<PathBuf> {
        // Check XDG_CONFIG_HOME first
        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join("sitecfg"));
        }

        // Fall back to ~/.config/sitecfg
        dirs::home_dir().map(|home| home.join(".config").join("sitecfg"))
    }
}

/// Explicit per-invocation overrides (CLI flags), highest priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueOverrides {
    /// Tool directory path
    pub tools_dir: Option<String>,
    /// Shared-library suffix token
    pub shlib_ext: Option<String>,
    /// Shared-library directory path
    pub shlib_dir: Option<String>,
    /// Execution root directory path
    pub exec_root: Option<String>,
}

/// Resolve the four site values.
/// Priority per field: explicit override -> `SITECFG_*` env -> defaults
/// file -> built-in fallback.
///
/// Fallbacks: the shared-library suffix comes from the running platform and
/// the execution root from the current directory; tool and library
/// directories fall back to the empty string (the binder binds them
/// verbatim, and `doctor` reports on empties after the fact).
#[must_use]
pub fn resolve_values(overrides: &ValueOverrides, defaults: &Defaults) -> SiteValues {
    let tools_dir = overrides
        .tools_dir
        .clone()
        .or_else(env_vars::tools_dir)
        .or_else(|| defaults.tools_dir.clone())
        .unwrap_or_default();

    let shlib_ext = overrides
        .shlib_ext
        .clone()
        .or_else(env_vars::shlib_ext)
        .or_else(|| defaults.shlib_ext.clone())
        .unwrap_or_else(|| platform::shlib_suffix().to_string());

    let shlib_dir = overrides
        .shlib_dir
        .clone()
        .or_else(env_vars::shlib_dir)
        .or_else(|| defaults.shlib_dir.clone())
        .unwrap_or_default();

    let exec_root = overrides
        .exec_root
        .clone()
        .or_else(env_vars::exec_root)
        .or_else(|| defaults.exec_root.clone())
        .unwrap_or_else(|| {
            env::current_dir().map_or_else(|_| String::new(), |dir| dir.display().to_string())
        });

    SiteValues {
        tools_dir,
        shlib_ext,
        shlib_dir,
        exec_root,
    }
}
