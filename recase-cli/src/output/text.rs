//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use recase_core::TransformResult;
use std::io::Write;

/// Text formatter - writes the transformed text as-is
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_result(&mut self, result: &TransformResult) -> Result<()> {
        self.writer.write_all(result.text.as_bytes())?;
        if !result.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
