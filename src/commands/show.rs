//! Show command
//!
//! Prints a rendered/configured site file in text, JSON, or TOML form.

use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

use sitecfg::find_site_file;
use sitecfg::site::SiteConfig;

/// Output format for the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable field listing
    Text,
    /// Pretty-printed JSON
    Json,
    /// The on-disk TOML form
    Toml,
}

fn format_text(config: &SiteConfig) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(&mut out, "Tools dir   {}", config.tools_dir);
    let _ = writeln!(&mut out, "Shlib ext   {}", config.shlib_ext);
    let _ = writeln!(&mut out, "Shlib dir   {}", config.shlib_dir);
    let _ = writeln!(&mut out, "Exec root   {}", config.exec_root);

    if !config.extras.is_empty() {
        out.push('\n');
        for (key, value) in &config.extras {
            let _ = writeln!(&mut out, "{key} = {value}");
        }
    }

    out
}

/// Run the show command.
pub(crate) fn run(site: Option<&str>, format: OutputFormat) -> Result<()> {
    let site_path = site.map_or_else(find_site_file, PathBuf::from);
    let config = SiteConfig::load_from(&site_path)?;

    let rendered = match format {
        OutputFormat::Text => format_text(&config),
        OutputFormat::Json => config.to_json_string()?,
        OutputFormat::Toml => config.to_toml_string()?,
    };

    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
