//! Shared test helpers and utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the sitecfg binary (target/debug/sitecfg)
///
/// This is shared across all integration tests to avoid duplication.
pub(crate) fn get_sitecfg_binary() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    std::path::Path::new(manifest_dir)
        .join("target/debug/sitecfg")
        .to_string_lossy()
        .to_string()
}

/// Create a site template (`site.toml.in`) with the four standard tokens
///
/// # Returns
/// The path to the created template
#[allow(dead_code)]
pub(crate) fn create_site_template(temp_dir: &TempDir) -> PathBuf {
    let template_path = temp_dir.path().join("site.toml.in");

    let content = r#"tools_dir = "@TOOLS_DIR@"
shlib_ext = "@SHLIB_EXT@"
shlib_dir = "@SHLIB_DIR@"
exec_root = "@EXEC_ROOT@"
"#;

    fs::write(&template_path, content).expect("Failed to write site template");
    template_path
}

/// Create a companion script (`suite.toml`) next to the site file
///
/// # Arguments
/// * `params` - Slice of (key, value) pairs for the `[params]` table
#[allow(dead_code)]
pub(crate) fn create_companion(temp_dir: &TempDir, params: &[(&str, &str)]) -> PathBuf {
    use std::fmt::Write;

    let companion_path = temp_dir.path().join("suite.toml");

    let mut content = String::from("[params]\n");
    for (key, value) in params {
        writeln!(&mut content, "{key} = \"{value}\"").unwrap();
    }

    fs::write(&companion_path, content).expect("Failed to write companion script");
    companion_path
}
