//! Path conventions for site files, their templates, and companion scripts.
//!
//! A checkout carries `site.toml.in` (the template), `site.toml` (the
//! rendered site file), and `suite.toml` (the companion script the loader
//! continues from). Site file and companion are always siblings.

use crate::env_vars;
use std::path::{Path, PathBuf};

/// Rendered site file name
pub const SITE_FILE: &str = "site.toml";

/// Companion script name (sibling of the site file)
pub const COMPANION_FILE: &str = "suite.toml";

/// Suffix marking a file as a template
pub const TEMPLATE_SUFFIX: &str = ".in";

/// Find the site file for the current directory.
/// Priority: `SITECFG_SITE_FILE` env var -> ./site.toml (defaults to
/// site.toml even when absent).
#[must_use]
pub fn find_site_file() -> PathBuf {
    if let Some(site_file) = env_vars::site_file() {
        return PathBuf::from(site_file);
    }

    find_site_file_in(".")
}

/// The site file path for `dir` (present or not).
#[must_use]
pub fn find_site_file_in(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(SITE_FILE)
}

/// Whether `path` names a template (`*.in`).
#[must_use]
pub fn is_template(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "in")
}

/// Get the template path for a site file by appending the `.in` suffix.
#[must_use]
pub fn template_for_site(site: &Path) -> PathBuf {
    let mut template = site.as_os_str().to_owned();
    template.push(TEMPLATE_SUFFIX);
    PathBuf::from(template)
}

/// Get the output path for a template by stripping the `.in` suffix.
/// A path without the suffix is returned unchanged.
#[must_use]
pub fn site_for_template(template: &Path) -> PathBuf {
    let template_str = template.to_string_lossy();
    if let Some(site_str) = template_str.strip_suffix(TEMPLATE_SUFFIX) {
        return PathBuf::from(site_str);
    }

    template.to_path_buf()
}

/// Get the fixed companion script path for a site file: the sibling
/// `suite.toml` in the same directory.
#[must_use]
pub fn companion_for_site(site: &Path) -> PathBuf {
    site.with_file_name(COMPANION_FILE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;

    #[test]
    fn site_file_in_dir() {
        assert_eq!(
            find_site_file_in("/checkout/tests"),
            Path::new("/checkout/tests/site.toml")
        );
    }

    #[test]
    fn template_for_site_appends_suffix() {
        assert_eq!(
            template_for_site(Path::new("tests/site.toml")),
            Path::new("tests/site.toml.in")
        );
    }

    #[test]
    fn site_for_template_strips_suffix() {
        assert_eq!(
            site_for_template(Path::new("tests/site.toml.in")),
            Path::new("tests/site.toml")
        );
    }

    #[test]
    fn site_for_template_without_suffix_is_unchanged() {
        assert_eq!(
            site_for_template(Path::new("tests/site.toml")),
            Path::new("tests/site.toml")
        );
    }

    #[test]
    fn companion_is_a_sibling() {
        assert_eq!(
            companion_for_site(Path::new("/checkout/tests/site.toml")),
            Path::new("/checkout/tests/suite.toml")
        );
        assert_eq!(
            companion_for_site(Path::new("site.toml")),
            Path::new("suite.toml")
        );
    }

    #[test]
    fn template_detection() {
        assert!(is_template(Path::new("site.toml.in")));
        assert!(!is_template(Path::new("site.toml")));
        assert!(!is_template(Path::new("suite.toml")));
    }
}
