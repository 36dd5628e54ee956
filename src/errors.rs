use crate::{converter::ConversionError, validation, validation::Violation};
use thiserror::Error;
use validator::ValidationErrors;

/// The two ways applying a patch can fail.
///
/// `Unprocessable` covers every fault raised while turning the document into
/// a new value: malformed operations, missing paths, failed `test`
/// operations, oversize documents and type mismatches during conversion.
/// `Validation` means the patched value was well formed but broke one or more
/// declared constraints; it carries the complete violation set.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Unprocessable patch: {source:#}")]
    Unprocessable {
        #[source]
        source: anyhow::Error,
    },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

impl PatchError {
    pub fn unprocessable(err: impl Into<anyhow::Error>) -> Self {
        PatchError::Unprocessable { source: err.into() }
    }

    pub fn is_unprocessable(&self) -> bool {
        matches!(self, PatchError::Unprocessable { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PatchError::Validation(_))
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            PatchError::Validation(errors) => Some(errors),
            PatchError::Unprocessable { .. } => None,
        }
    }

    /// Flattened violation records; empty unless this is a validation failure.
    pub fn violations(&self) -> Vec<Violation> {
        self.validation_errors()
            .map(validation::violations)
            .unwrap_or_default()
    }
}

impl From<ValidationErrors> for PatchError {
    fn from(err: ValidationErrors) -> Self {
        PatchError::Validation(err)
    }
}

impl From<ConversionError> for PatchError {
    fn from(err: ConversionError) -> Self {
        PatchError::unprocessable(err)
    }
}

pub fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
