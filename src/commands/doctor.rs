//! Doctor command - Diagnose common site configuration problems
//!
//! This command checks for common issues in a checkout:
//! - Missing or unparseable site file
//! - Empty bound fields (the binder itself never validates them)
//! - Missing or unparseable companion script
//! - Shared-library suffix that does not match the running platform

use anyhow::Result;
use std::path::PathBuf;

use sitecfg::site::SiteConfig;
use sitecfg::{companion_for_site, find_site_file, platform};

/// Run the doctor command to diagnose common problems.
#[allow(clippy::cognitive_complexity)]
pub(crate) fn run(site: Option<&str>, quiet: bool) -> Result<()> {
    let site_path = site.map_or_else(find_site_file, PathBuf::from);
    let companion_path = companion_for_site(&site_path);

    if !quiet {
        println!("Checking site configuration for common problems...");
        println!();
    }

    let mut has_errors = false;
    let mut has_warnings = false;

    if !site_path.exists() {
        eprintln!("Site file not found at {}", site_path.display());
        eprintln!("  Run `sitecfg render` then `sitecfg bind` to generate it");
        has_errors = true;
    }

    let config = if site_path.exists() {
        match SiteConfig::load_from(&site_path) {
            Ok(config) => {
                if !quiet {
                    println!("Site file is valid TOML");
                }
                Some(config)
            }
            Err(err) => {
                eprintln!("Site file is not parseable: {err}");
                has_errors = true;
                None
            }
        }
    } else {
        None
    };

    if let Some(config) = &config {
        for (label, value) in [
            ("tools_dir", &config.tools_dir),
            ("shlib_ext", &config.shlib_ext),
            ("shlib_dir", &config.shlib_dir),
            ("exec_root", &config.exec_root),
        ] {
            if value.is_empty() {
                eprintln!(" {label} is empty");
                has_warnings = true;
            } else if !quiet {
                println!("{label} set ({value})");
            }
        }

        let current = platform::shlib_suffix();
        if !config.shlib_ext.is_empty() && config.shlib_ext != current {
            eprintln!(
                " shlib_ext mismatch: site file has {}, current platform uses {current}",
                config.shlib_ext
            );
            has_warnings = true;
        }
    }

    if companion_path.exists() {
        if !quiet {
            println!("Companion script found at {}", companion_path.display());
        }
    } else {
        eprintln!(
            " Companion script not found at {} (the load step will fail)",
            companion_path.display()
        );
        has_warnings = true;
    }

    if !quiet {
        println!();
    }

    if has_errors {
        anyhow::bail!("Doctor found problems that prevent binding");
    }

    if has_warnings && !quiet {
        println!("Doctor found warnings (binding may still succeed)");
    } else if !quiet {
        println!("No issues found");
    }

    Ok(())
}
