//! Styles command implementation

use anyhow::Result;
use clap::Args;
use recase_core::CaseStyle;

/// Arguments for the styles command
#[derive(Debug, Args)]
pub struct StylesArgs {}

impl StylesArgs {
    /// Print the selectable style identifiers, one per line
    pub fn execute(&self) -> Result<()> {
        for style in CaseStyle::ALL {
            println!("{}", style.label());
        }
        Ok(())
    }
}
