//! Site configuration binder.
//!
//! Binds the four pre-resolved site values into a config object, then drives
//! the two-step loader protocol: one initialization call, one load call with
//! the fixed companion script path, in that order. The binder performs no
//! validation and no error translation; delegated failures propagate as-is.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::loader::SiteLoader;
use crate::site::{RunContext, SiteConfig, SiteValues};

/// Binds build-time-known values into a site config and triggers the
/// delegated setup steps.
///
/// The companion path is fixed at construction time and does not depend on
/// the four values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBinder {
    values: SiteValues,
    companion: PathBuf,
}

impl SiteBinder {
    /// Create a binder over the given values and the fixed companion script.
    pub fn new(values: SiteValues, companion: impl Into<PathBuf>) -> Self {
        Self {
            values,
            companion: companion.into(),
        }
    }

    /// The fixed companion script path handed to the load call.
    #[must_use]
    pub fn companion(&self) -> &Path {
        &self.companion
    }

    /// The substitution values this binder carries.
    #[must_use]
    pub fn values(&self) -> &SiteValues {
        &self.values
    }

    /// Assign the four values into the config, verbatim.
    ///
    /// Pure assignment: no trimming, no case change, no validation. Empty
    /// values bind as empty strings; any resulting failure surfaces later,
    /// inside the delegated calls.
    pub fn bind(&self, config: &mut SiteConfig) {
        config.tools_dir = self.values.tools_dir.clone();
        config.shlib_ext = self.values.shlib_ext.clone();
        config.shlib_dir = self.values.shlib_dir.clone();
        config.exec_root = self.values.exec_root.clone();
    }

    /// Run the full binding contract.
    ///
    /// Binds the four fields, then invokes `loader.initialize` exactly once
    /// and `loader.load_config` exactly once with the fixed companion path.
    /// The config transitions to configured only when the load call returns.
    pub fn run(
        &self,
        ctx: &RunContext,
        loader: &mut dyn SiteLoader,
        config: &mut SiteConfig,
    ) -> Result<()> {
        self.bind(config);
        crate::debug!(
            "bound site values (tools_dir={}, exec_root={})",
            self.values.tools_dir,
            self.values.exec_root
        );

        loader.initialize(ctx, config)?;
        loader.load_config(config, &self.companion)?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;
    use std::path::Path;

    /// Records the order of delegated calls and the paths they received.
    #[derive(Debug, Default)]
    struct RecordingLoader {
        calls: Vec<String>,
        fail_initialize: bool,
    }

    impl SiteLoader for RecordingLoader {
        fn initialize(&mut self, ctx: &RunContext, _config: &mut SiteConfig) -> Result<()> {
            self.calls.push(format!("initialize:{}", ctx.suite));
            if self.fail_initialize {
                anyhow::bail!("platform integration unavailable");
            }
            Ok(())
        }

        fn load_config(&mut self, _config: &mut SiteConfig, script: &Path) -> Result<()> {
            self.calls.push(format!("load:{}", script.display()));
            Ok(())
        }
    }

    fn sample_values() -> SiteValues {
        SiteValues::new("/opt/llvm/bin", ".so", "/opt/llvm/lib", "/tmp/build/tests")
    }

    #[test]
    fn bind_assigns_values_verbatim() {
        let binder = SiteBinder::new(sample_values(), "suite.toml");
        let mut config = SiteConfig::new();

        binder.bind(&mut config);

        assert_eq!(config.tools_dir, "/opt/llvm/bin");
        assert_eq!(config.shlib_ext, ".so");
        assert_eq!(config.shlib_dir, "/opt/llvm/lib");
        assert_eq!(config.exec_root, "/tmp/build/tests");
    }

    #[test]
    fn bind_performs_no_validation() {
        let values = SiteValues::new("", "", "  /padded/path ", "");
        let binder = SiteBinder::new(values, "suite.toml");
        let mut config = SiteConfig::new();

        binder.bind(&mut config);

        // Empty in, empty out; no trimming either
        assert_eq!(config.tools_dir, "");
        assert_eq!(config.shlib_ext, "");
        assert_eq!(config.shlib_dir, "  /padded/path ");
        assert_eq!(config.exec_root, "");
    }

    #[test]
    fn run_invokes_initialize_then_load_exactly_once() {
        let binder = SiteBinder::new(sample_values(), "/suite/dir/suite.toml");
        let mut loader = RecordingLoader::default();
        let mut config = SiteConfig::new();
        let ctx = RunContext::new("regress");

        binder.run(&ctx, &mut loader, &mut config).unwrap();

        assert_eq!(
            loader.calls,
            vec![
                "initialize:regress".to_string(),
                "load:/suite/dir/suite.toml".to_string(),
            ]
        );
    }

    #[test]
    fn run_passes_fixed_companion_regardless_of_values() {
        let values = SiteValues::new("/a", ".dll", "/b", "/c");
        let binder = SiteBinder::new(values, "fixed/suite.toml");
        let mut loader = RecordingLoader::default();
        let mut config = SiteConfig::new();

        binder
            .run(&RunContext::new("any"), &mut loader, &mut config)
            .unwrap();

        assert_eq!(
            loader.calls.last().map(String::as_str),
            Some("load:fixed/suite.toml")
        );
    }

    #[test]
    fn run_propagates_delegated_failure_without_load() {
        let binder = SiteBinder::new(sample_values(), "suite.toml");
        let mut loader = RecordingLoader {
            fail_initialize: true,
            ..RecordingLoader::default()
        };
        let mut config = SiteConfig::new();

        let err = binder
            .run(&RunContext::new("regress"), &mut loader, &mut config)
            .unwrap_err();

        assert!(err.to_string().contains("platform integration unavailable"));
        // Failure short-circuits: the load call never happens
        assert_eq!(loader.calls, vec!["initialize:regress".to_string()]);
        // Binding already took place before the delegated call failed
        assert_eq!(config.tools_dir, "/opt/llvm/bin");
    }
}
