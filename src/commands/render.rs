//! Render command
//!
//! Expands `@TOKEN@` placeholders in a site template (or every `*.in` file
//! under a directory) into rendered output. The four built-in tokens
//! TOOLS_DIR, SHLIB_EXT, SHLIB_DIR and EXEC_ROOT are seeded from the
//! resolved site values; `--set` pairs override them.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use sitecfg::config::{Defaults, ValueOverrides, resolve_values};
use sitecfg::template::{MissingTokens, Substitutions, render_file};
use sitecfg::{find_site_file, is_template, site_for_template, template_for_site};

/// Parse a `NAME=VALUE` pair from a `--set` argument.
fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .with_context(|| format!("Invalid --set value '{pair}' (expected NAME=VALUE)"))
}

/// Build the substitution set: built-in tokens first, `--set` pairs on top.
fn build_substitutions(sets: &[String], defaults: &Defaults) -> Result<Substitutions> {
    let values = resolve_values(&ValueOverrides::default(), defaults);

    let mut subs = Substitutions::new();
    subs.set("TOOLS_DIR", values.tools_dir)
        .set("SHLIB_EXT", values.shlib_ext)
        .set("SHLIB_DIR", values.shlib_dir)
        .set("EXEC_ROOT", values.exec_root);

    for pair in sets {
        let (name, value) = parse_pair(pair)?;
        subs.set(name, value);
    }

    Ok(subs)
}

/// Render every `*.in` template below `dir`, each next to its source.
fn render_tree(dir: &Path, subs: &Substitutions, missing: MissingTokens, quiet: bool) -> Result<()> {
    let mut rendered = 0usize;

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() || !is_template(entry.path()) {
            continue;
        }

        let output = site_for_template(entry.path());
        render_file(entry.path(), &output, subs, missing)?;
        rendered += 1;

        if !quiet {
            println!("Rendered {} -> {}", entry.path().display(), output.display());
        }
    }

    if rendered == 0 && !quiet {
        println!("No *.in templates under {}", dir.display());
    }

    Ok(())
}

/// Run the render command.
pub(crate) fn run(
    path: Option<&str>,
    output: Option<&str>,
    sets: &[String],
    allow_missing: bool,
    config_path: Option<&str>,
    skip_rc: bool,
    quiet: bool,
) -> Result<()> {
    let defaults = Defaults::load_with_options(config_path, skip_rc)?;
    let subs = build_substitutions(sets, &defaults)?;
    let missing = if allow_missing {
        MissingTokens::Empty
    } else {
        MissingTokens::Error
    };

    // Default target: the template next to the site file for this checkout
    let target = path.map_or_else(|| template_for_site(&find_site_file()), PathBuf::from);

    if target.is_dir() {
        if output.is_some() {
            bail!("--output cannot be combined with a directory argument");
        }
        return render_tree(&target, &subs, missing, quiet);
    }

    let output = output.map_or_else(|| site_for_template(&target), PathBuf::from);
    render_file(&target, &output, &subs, missing)?;

    if !quiet {
        println!("Rendered {} -> {}", target.display(), output.display());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(parse_pair("KEY=a=b").unwrap(), ("KEY", "a=b"));
        assert_eq!(parse_pair("EMPTY=").unwrap(), ("EMPTY", ""));
    }

    #[test]
    fn parse_pair_rejects_missing_equals() {
        assert!(parse_pair("KEY").is_err());
    }

    #[test]
    fn substitutions_include_builtin_tokens() {
        let subs = build_substitutions(&[], &Defaults::default()).unwrap();
        assert!(subs.get("TOOLS_DIR").is_some());
        assert!(subs.get("SHLIB_EXT").is_some());
        assert!(subs.get("SHLIB_DIR").is_some());
        assert!(subs.get("EXEC_ROOT").is_some());
    }

    #[test]
    fn set_pairs_override_builtins() {
        let sets = vec!["TOOLS_DIR=/custom/bin".to_string()];
        let subs = build_substitutions(&sets, &Defaults::default()).unwrap();
        assert_eq!(subs.get("TOOLS_DIR"), Some("/custom/bin"));
    }
}
