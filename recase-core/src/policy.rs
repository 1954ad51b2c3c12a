//! Style application policy
//!
//! Decides whether a document field should be rewritten at all. The host
//! re-applies the policy on every save, so the decision must be idempotent
//! and must report "unchanged" for text already in the requested style to
//! avoid spurious writes in the host's update pipeline.

use crate::engine::CaseTransformer;
use crate::error::{CaseError, Result};
use crate::style::CaseStyle;
use serde::{Deserialize, Serialize};

/// Host configuration surface, passed in explicitly per call
///
/// Mirrors the host's "feature enabled" flag and style selector; the engine
/// owns no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplySettings {
    /// Whether case transformation is enabled at all
    pub enabled: bool,
    /// The configured style, if one has been selected
    pub style: Option<CaseStyle>,
}

impl ApplySettings {
    /// Enabled settings with the given style
    pub fn enabled(style: CaseStyle) -> Self {
        Self {
            enabled: true,
            style: Some(style),
        }
    }

    /// Disabled settings; the policy never rewrites under these
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            style: None,
        }
    }
}

/// Outcome of a policy evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The field already matches the requested style
    Unchanged,
    /// The field should be replaced with this value
    Rewritten(String),
}

impl Rewrite {
    /// The new value, if the policy decided to rewrite
    pub fn into_value(self) -> Option<String> {
        match self {
            Rewrite::Unchanged => None,
            Rewrite::Rewritten(value) => Some(value),
        }
    }
}

/// Applies the eligibility rules around the transformation engine
#[derive(Debug, Clone, Default)]
pub struct ApplyPolicy {
    transformer: CaseTransformer,
}

impl ApplyPolicy {
    /// Create a policy around a default transformer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy around a specific transformer
    pub fn with_transformer(transformer: CaseTransformer) -> Self {
        Self { transformer }
    }

    /// Whether `current_value` differs from its transformed form
    pub fn should_rewrite(&self, current_value: &str, style: CaseStyle) -> bool {
        matches!(self.rewrite(current_value, style), Rewrite::Rewritten(_))
    }

    /// Compute the rewrite decision for a field value
    ///
    /// Blank and whitespace-only values are never rewritten; the input is
    /// never mutated in place.
    pub fn rewrite(&self, current_value: &str, style: CaseStyle) -> Rewrite {
        if current_value.trim().is_empty() {
            return Rewrite::Unchanged;
        }
        let transformed = self.transformer.transform_str(current_value, style);
        if transformed == current_value {
            Rewrite::Unchanged
        } else {
            Rewrite::Rewritten(transformed)
        }
    }

    /// Evaluate a field value against the host configuration
    ///
    /// Disabled settings never rewrite. Enabled settings without a selected
    /// style fail with [`CaseError::EmptyConfiguration`]: that is a host
    /// precondition violation, not a degraded mode.
    pub fn evaluate(&self, current_value: &str, settings: &ApplySettings) -> Result<Rewrite> {
        if !settings.enabled {
            return Ok(Rewrite::Unchanged);
        }
        let style = settings.style.ok_or(CaseError::EmptyConfiguration)?;
        Ok(self.rewrite(current_value, style))
    }
}
