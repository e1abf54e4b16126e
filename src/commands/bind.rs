//! Bind command
//!
//! Resolves the four site values, binds them into a fresh config object,
//! runs the loader protocol (initialize, then load from the sibling
//! companion script), and writes the configured site file.

use anyhow::{Context, Result};
use std::path::PathBuf;

use sitecfg::config::{Defaults, ValueOverrides, resolve_values};
use sitecfg::site::{RunContext, SiteConfig};
use sitecfg::{SiteBinder, TomlSiteLoader, companion_for_site, env_vars, paths};

/// Per-invocation options for the bind command.
#[derive(Debug, Default)]
pub(crate) struct BindOptions {
    /// Explicit site file path
    pub site: Option<String>,
    /// Explicit overrides for the four values
    pub overrides: ValueOverrides,
    /// Suite name for the run context
    pub suite: Option<String>,
    /// `KEY=VALUE` runtime parameters
    pub params: Vec<String>,
    /// Custom defaults file path
    pub config_path: Option<String>,
    /// Skip defaults files entirely
    pub skip_rc: bool,
    /// Suppress non-error output
    pub quiet: bool,
}

/// Resolve the site file path.
/// Priority: `--site` flag -> `SITECFG_SITE_FILE` env -> defaults file ->
/// ./site.toml.
fn resolve_site_path(flag: Option<&str>, defaults: &Defaults) -> PathBuf {
    flag.map(PathBuf::from)
        .or_else(|| env_vars::site_file().map(PathBuf::from))
        .or_else(|| defaults.site_file.clone().map(PathBuf::from))
        .unwrap_or_else(|| paths::find_site_file_in("."))
}

/// Run the bind command.
pub(crate) fn run(options: &BindOptions) -> Result<()> {
    let defaults = Defaults::load_with_options(options.config_path.as_deref(), options.skip_rc)?;
    let values = resolve_values(&options.overrides, &defaults);
    let site_path = resolve_site_path(options.site.as_deref(), &defaults);
    let companion = companion_for_site(&site_path);

    let mut ctx = RunContext::new(options.suite.as_deref().unwrap_or("default"));
    for pair in &options.params {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid --param value '{pair}' (expected KEY=VALUE)"))?;
        ctx.params.insert(key.to_string(), value.to_string());
    }

    // The harness owns the config object; it exists before the binder runs
    let mut config = SiteConfig::new();
    let mut loader = TomlSiteLoader::new();
    let binder = SiteBinder::new(values, companion);

    binder.run(&ctx, &mut loader, &mut config)?;

    config.save_to(&site_path)?;

    if !options.quiet {
        println!("Site configuration written to {}", site_path.display());
    }

    Ok(())
}
