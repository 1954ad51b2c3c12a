//! Transform command implementation

use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::Result;
use clap::Args;
use recase_core::{CaseTransformer, TransformRequest};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Case style identifier, e.g. "Sentence case" or "UPPERCASE"
    #[arg(short, long, value_name = "STYLE")]
    pub style: String,

    /// Text to transform; mutually exclusive with --input
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file (default: stdin when --text is not given)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// The transformed text only
    Text,
    /// The result DTO as JSON
    Json,
}

impl TransformArgs {
    /// Execute the transform command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose)?;

        let text = self.read_input()?;
        log::info!("transforming {} bytes with style '{}'", text.len(), self.style);

        let request = TransformRequest::parse(text, &self.style)
            .map_err(|_| CliError::InvalidStyle(self.style.clone()))?;
        let result = CaseTransformer::new().transform(&request)?;

        match &self.output {
            Some(path) => {
                let file = fs::File::create(path)?;
                self.write_formatted(file, &result)
            }
            None => self.write_formatted(std::io::stdout().lock(), &result),
        }
    }

    fn read_input(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return fs::read_to_string(path)
                .map_err(|_| CliError::FileNotFound(path.display().to_string()).into());
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        if buffer.is_empty() {
            return Err(CliError::EmptyInput.into());
        }
        Ok(buffer)
    }

    fn write_formatted<W: std::io::Write>(
        &self,
        writer: W,
        result: &recase_core::TransformResult,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Text => TextFormatter::new(writer).write_result(result),
            OutputFormat::Json => JsonFormatter::new(writer).write_result(result),
        }
    }
}
