//! Shared test utilities for sitecfg tests
//!
//! This module provides common test helpers and fixtures to reduce code
//! duplication across test modules.

#[cfg(test)]
pub mod fixtures {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Create a temporary checkout with a minimal site template
    pub fn create_template_dir() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let template_path = temp_dir.path().join("site.toml.in");

        let content = r#"tools_dir = "@TOOLS_DIR@"
shlib_ext = "@SHLIB_EXT@"
shlib_dir = "@SHLIB_DIR@"
exec_root = "@EXEC_ROOT@"
"#;

        fs::write(&template_path, content).expect("Failed to write site template");
        (temp_dir, template_path)
    }

    /// Create a temporary checkout with a rendered site file and a sibling
    /// companion script
    pub fn create_site_dir() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let site_path = temp_dir.path().join("site.toml");

        let site = r#"tools_dir = "/opt/llvm/bin"
shlib_ext = ".so"
shlib_dir = "/opt/llvm/lib"
exec_root = "/tmp/build/tests"
"#;
        fs::write(&site_path, site).expect("Failed to write site file");

        let companion = "[params]\ntimeout = \"60\"\n";
        fs::write(temp_dir.path().join("suite.toml"), companion)
            .expect("Failed to write companion script");

        (temp_dir, site_path)
    }
}
