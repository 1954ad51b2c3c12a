//! Check command implementation
//!
//! Runs the engine self-check and reports the result, mirroring the
//! diagnostic call a host application uses to verify the engine is
//! reachable and behaving.

use anyhow::{bail, Result};
use clap::Args;
use recase_core::{health_check, HealthStatus};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Emit the report as JSON instead of plain text
    #[arg(short, long)]
    pub json: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CheckArgs {
    /// Execute the check command; exits non-zero unless all checks pass
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose)?;

        let report = health_check();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "status: {}",
                match report.status {
                    HealthStatus::Success => "success",
                    HealthStatus::Warning => "warning",
                    HealthStatus::Error => "error",
                }
            );
            println!("transformation works: {}", report.transformation_works);
            println!("styles available: {}", report.styles_available);
            if let Some(error) = &report.error {
                println!("error: {error}");
            }
        }

        if report.status != HealthStatus::Success {
            log::warn!("engine self-check did not pass cleanly");
            bail!("engine self-check failed");
        }
        Ok(())
    }
}
