//! Sitecfg command-line interface
//!
//! Renders site-config templates and binds site values for a test-harness
//! checkout.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

use commands::show::OutputFormat;
use sitecfg::config::ValueOverrides;

/// Display an error with optional backtrace information
fn display_error(err: &anyhow::Error, backtrace_enabled: bool) {
    eprintln!("error: {err}");

    // Show error chain
    let mut source = err.source();
    while let Some(err) = source {
        eprintln!("caused by: {err}");
        source = err.source();
    }

    // Show backtrace if enabled
    if backtrace_enabled {
        let backtrace = err.backtrace();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            eprintln!("\nBacktrace:");
            eprintln!("{backtrace}");
        }
    }
}

#[derive(Parser)]
#[command(name = "sitecfg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Site configuration binder for test-suite checkouts", long_about = None)]
#[command(disable_version_flag = true)]
pub(crate) struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    _version: Option<bool>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Show backtraces for errors (requires RUST_BACKTRACE)
    #[arg(long, global = true)]
    backtrace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand @TOKEN@ placeholders in a site template
    Render {
        /// Template file, or a directory to render every *.in file under
        /// (defaults to the template next to the checkout's site file)
        path: Option<String>,

        /// Output file (defaults to the template path without its .in suffix)
        #[arg(long, short)]
        output: Option<String>,

        /// Extra token values as NAME=VALUE (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        sets: Vec<String>,

        /// Expand unresolved tokens to the empty string instead of failing
        #[arg(long)]
        allow_missing: bool,

        /// Path to a defaults file (overrides .sitecfg.toml lookup)
        #[arg(long)]
        config: Option<String>,

        /// Skip defaults files entirely
        #[arg(long)]
        skip_rc: bool,

        /// Suppress all output except errors
        #[arg(long, short)]
        quiet: bool,
    },

    /// Bind site values and run the loader protocol
    Bind {
        /// Site file to write (defaults to ./site.toml)
        #[arg(long)]
        site: Option<String>,

        /// Tool directory path
        #[arg(long)]
        tools_dir: Option<String>,

        /// Shared-library suffix token (e.g. ".so")
        #[arg(long)]
        shlib_ext: Option<String>,

        /// Shared-library directory path
        #[arg(long)]
        shlib_dir: Option<String>,

        /// Test execution root directory path
        #[arg(long)]
        exec_root: Option<String>,

        /// Suite name for the run context
        #[arg(long)]
        suite: Option<String>,

        /// Runtime parameters as KEY=VALUE (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Path to a defaults file (overrides .sitecfg.toml lookup)
        #[arg(long)]
        config: Option<String>,

        /// Skip defaults files entirely
        #[arg(long)]
        skip_rc: bool,

        /// Suppress all output except errors
        #[arg(long, short)]
        quiet: bool,
    },

    /// Print a site file
    Show {
        /// Site file to print (defaults to ./site.toml)
        #[arg(long)]
        site: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Diagnose common site configuration problems
    Doctor {
        /// Site file to check (defaults to ./site.toml)
        #[arg(long)]
        site: Option<String>,

        /// Suppress all output except problems
        #[arg(long, short)]
        quiet: bool,
    },

    /// Display environment information
    Env,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize debug mode (flag or SITECFG_DEBUG)
    sitecfg::init_debug(cli.debug || sitecfg::env_vars::debug());

    let backtrace = cli.backtrace;

    let result = match cli.command {
        Commands::Render {
            path,
            output,
            sets,
            allow_missing,
            config,
            skip_rc,
            quiet,
        } => commands::render::run(
            path.as_deref(),
            output.as_deref(),
            &sets,
            allow_missing,
            config.as_deref(),
            skip_rc,
            quiet,
        ),
        Commands::Bind {
            site,
            tools_dir,
            shlib_ext,
            shlib_dir,
            exec_root,
            suite,
            params,
            config,
            skip_rc,
            quiet,
        } => commands::bind::run(&commands::bind::BindOptions {
            site,
            overrides: ValueOverrides {
                tools_dir,
                shlib_ext,
                shlib_dir,
                exec_root,
            },
            suite,
            params,
            config_path: config,
            skip_rc,
            quiet,
        }),
        Commands::Show { site, format } => commands::show::run(site.as_deref(), format),
        Commands::Doctor { site, quiet } => commands::doctor::run(site.as_deref(), quiet),
        Commands::Env => {
            commands::env::run();
            Ok(())
        }
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    if let Err(e) = result {
        display_error(&e, backtrace);
        process::exit(1);
    }
}

mod commands;
