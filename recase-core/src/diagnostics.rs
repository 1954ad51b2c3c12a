//! Engine self-check
//!
//! A thin wrapper host tooling can call to verify the engine is reachable
//! and behaving: runs canned inputs through the transformer and compares
//! against the expected canonical output.

use crate::engine::CaseTransformer;
use crate::style::CaseStyle;
use serde::{Deserialize, Serialize};

/// Overall outcome of a health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All checks passed
    Success,
    /// Some checks passed
    Warning,
    /// No check passed
    Error,
}

/// Machine-readable health report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall outcome
    pub status: HealthStatus,
    /// Whether the canned transformations produced the expected output
    pub transformation_works: bool,
    /// Number of selectable styles
    pub styles_available: usize,
    /// Description of the first failed check, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

const CHECKS: &[(&str, CaseStyle, &str)] = &[
    ("hello world", CaseStyle::Upper, "HELLO WORLD"),
    (
        "this is a test sentence. here is another sentence.",
        CaseStyle::Sentence,
        "This is a test sentence. Here is another sentence.",
    ),
];

/// Run the canned checks against a default transformer
pub fn health_check() -> HealthReport {
    health_check_with(&CaseTransformer::new())
}

/// Run the canned checks against a specific transformer
pub fn health_check_with(transformer: &CaseTransformer) -> HealthReport {
    let mut passed = 0;
    let mut error = None;
    for (input, style, expected) in CHECKS {
        let actual = transformer.transform_str(input, *style);
        if actual == *expected {
            passed += 1;
        } else if error.is_none() {
            error = Some(format!(
                "{style} produced {actual:?} for {input:?}, expected {expected:?}"
            ));
        }
    }

    let status = if passed == CHECKS.len() {
        HealthStatus::Success
    } else if passed > 0 {
        HealthStatus::Warning
    } else {
        HealthStatus::Error
    };
    HealthReport {
        status,
        transformation_works: passed == CHECKS.len(),
        styles_available: CaseStyle::ALL.len(),
        error,
    }
}
