//! Case transformation engine for business-document text fields
//!
//! Applies a chosen letter-case style to text idempotently, without
//! corrupting spacing, punctuation, abbreviations, URLs or numerals. The
//! pipeline is tokenize, segment into sentences, then apply per-word style
//! rules; everything is a pure function of the input plus static rule
//! tables.

#![warn(missing_docs)]

pub mod abbreviation;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod policy;
pub mod segment;
pub mod style;
pub mod token;

// Re-export key types
pub use abbreviation::AbbreviationList;
pub use diagnostics::{health_check, HealthReport, HealthStatus};
pub use engine::{CaseTransformer, TransformRequest, TransformResult};
pub use error::{CaseError, Result};
pub use policy::{ApplyPolicy, ApplySettings, Rewrite};
pub use style::CaseStyle;
pub use token::{Token, TokenKind};

// Convenience functions

/// Transform text with a validated style and a default transformer
pub fn transform(text: &str, style: CaseStyle) -> String {
    CaseTransformer::new().transform_str(text, style)
}

/// Transform text with a free-form style identifier from a host boundary
pub fn transform_named(text: &str, style: &str) -> Result<String> {
    CaseTransformer::new().transform_named(text, style)
}
