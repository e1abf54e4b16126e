//! Env Command
//!
//! Displays environment information useful for debugging site configuration
//! issues: tool version, platform facts, and the `SITECFG_*` variables.

use std::env;

/// Display environment information
pub(crate) fn run() {
    println!("## Environment");
    println!();
    println!("Sitecfg    {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("## Platform");
    println!();
    println!("OS         {}", env::consts::OS);
    println!("Arch       {}", env::consts::ARCH);
    println!("Family     {}", env::consts::FAMILY);
    println!("Shlib ext  {}", sitecfg::shlib_ext_token());
    println!();

    println!("## Environment variables");
    println!();
    for var in [
        "SITECFG_SITE_FILE",
        "SITECFG_TOOLS_DIR",
        "SITECFG_SHLIB_EXT",
        "SITECFG_SHLIB_DIR",
        "SITECFG_EXEC_ROOT",
        "SITECFG_DEBUG",
    ] {
        match env::var(var) {
            Ok(value) => println!("{var}={value}"),
            Err(_) => println!("{var} (unset)"),
        }
    }
}
