//! CLI subcommand implementations

pub mod check;
pub mod styles;
pub mod transform;

use anyhow::Result;

/// Initialize logging based on a `-v` count
pub(crate) fn init_logging(verbose: u8) -> Result<()> {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
    Ok(())
}
