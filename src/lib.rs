//! Sitecfg CLI internal library code

/// Get the shared-library suffix token to use.
/// Priority: `SITECFG_SHLIB_EXT` env var -> platform detection.
#[must_use]
pub fn shlib_ext_token() -> String {
    env_vars::shlib_ext().unwrap_or_else(|| platform::shlib_suffix().to_string())
}

pub mod binder;
pub mod config;
pub mod debug;
pub mod env_vars;
pub mod loader;
pub mod paths;
pub mod platform;
pub mod site;
pub mod template;
pub mod test_utils;

// Re-export common types for convenience
pub use binder::SiteBinder;
pub use config::{Defaults, ValueOverrides, resolve_values};
pub use debug::{debug_log, init_debug, is_debug_enabled};
pub use loader::{LoaderError, SiteLoader, TomlSiteLoader};
pub use paths::{
    COMPANION_FILE, SITE_FILE, TEMPLATE_SUFFIX, companion_for_site, find_site_file,
    find_site_file_in, is_template, site_for_template, template_for_site,
};
pub use platform::{shlib_suffix, shlib_suffix_for};
pub use site::{RunContext, SiteConfig, SiteValues};
pub use template::{MissingTokens, Substitutions, TemplateError, expand, render_file};
