//! Command-line entry point for recase

use clap::{Parser, Subcommand};
use recase_cli::commands::{check::CheckArgs, styles::StylesArgs, transform::TransformArgs};

/// Apply a letter-case style to text
#[derive(Parser)]
#[command(name = "recase", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a case style to text from an argument, a file or stdin
    Transform(TransformArgs),
    /// Run the engine self-check
    Check(CheckArgs),
    /// List the selectable style identifiers
    Styles(StylesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Transform(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Styles(args) => args.execute(),
    }
}
