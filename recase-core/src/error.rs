//! Error types for the case transformation engine

use thiserror::Error;

/// Errors reported by the transformation engine and application policy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// Unrecognized style identifier at the boundary
    #[error("unknown case style '{style}'")]
    InvalidStyle {
        /// The style identifier that failed to parse
        style: String,
    },

    /// Transformation requested while no style is configured
    #[error("case transformation is enabled but no style is configured")]
    EmptyConfiguration,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CaseError>;
