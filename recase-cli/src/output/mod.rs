//! Output formatting for transformation results

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use anyhow::Result;
use recase_core::TransformResult;

/// Common interface for result formatters
pub trait OutputFormatter {
    /// Write one transformation result to the underlying writer
    fn write_result(&mut self, result: &TransformResult) -> Result<()>;
}
