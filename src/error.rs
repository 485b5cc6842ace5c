//! Error types for prospector.
//!
//! The crate uses a small hierarchical error system:
//! - `ProspectorError` is the top-level error returned by public APIs
//! - `ValidationError` covers the two caller-visible submission conditions
//! - `OptionSourceError` covers remote option-list plumbing
//!
//! Option-source errors deserve a note: the catalog loader swallows them by
//! policy (a failed option fetch degrades to an empty choice list), so they
//! only surface when calling an [`OptionSource`](crate::options::OptionSource)
//! directly.

use thiserror::Error;

/// Result type alias for prospector operations.
pub type Result<T> = std::result::Result<T, ProspectorError>;

/// Top-level error enum for all prospector operations.
///
/// Use pattern matching or the `is_*` predicates to handle specific cases.
#[derive(Debug, Error)]
pub enum ProspectorError {
    /// Submission validation error (missing key, empty filter set).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Remote option-list error (transport or payload shape).
    #[error("Option source error: {0}")]
    OptionSource(#[from] OptionSourceError),
}

impl ProspectorError {
    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an option-source error.
    pub fn is_option_source(&self) -> bool {
        matches!(self, Self::OptionSource(_))
    }
}

/// Validation errors raised when building a submission request.
///
/// These are the only two conditions that block the build step. Neither is
/// fatal: the caller surfaces them locally and the user fixes the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The API key was empty after trimming. Checked before filter emptiness.
    #[error("API key is required")]
    MissingApiKey,

    /// The projected query object had zero keys.
    #[error("At least one search filter must be set")]
    EmptyFilterSet,
}

impl ValidationError {
    /// Returns true if this is the missing-API-key condition.
    pub fn is_missing_api_key(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }

    /// Returns true if this is the empty-filter-set condition.
    pub fn is_empty_filter_set(&self) -> bool {
        matches!(self, Self::EmptyFilterSet)
    }
}

/// Errors from fetching a remote option list.
///
/// The endpoint contract is a JSON array of plain strings; anything else is
/// [`OptionSourceError::BadShape`].
#[derive(Debug, Error)]
pub enum OptionSourceError {
    /// Transport-level failure (connect, timeout, non-success status).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The endpoint responded, but not with a JSON array of strings.
    #[error("Unexpected payload shape from {url}")]
    BadShape {
        /// The endpoint that returned the malformed payload.
        url: String,
    },
}

impl OptionSourceError {
    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a bad-shape error for the given endpoint.
    pub fn bad_shape(url: impl Into<String>) -> Self {
        Self::BadShape { url: url.into() }
    }
}

impl From<reqwest::Error> for OptionSourceError {
    fn from(err: reqwest::Error) -> Self {
        OptionSourceError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingApiKey.to_string(),
            "API key is required"
        );
        assert_eq!(
            ValidationError::EmptyFilterSet.to_string(),
            "At least one search filter must be set"
        );
    }

    #[test]
    fn test_option_source_error_display() {
        let err = OptionSourceError::bad_shape("https://example.com/industries.json");
        assert_eq!(
            err.to_string(),
            "Unexpected payload shape from https://example.com/industries.json"
        );
    }

    #[test]
    fn test_is_validation() {
        let err: ProspectorError = ValidationError::EmptyFilterSet.into();
        assert!(err.is_validation());
        assert!(!err.is_option_source());
    }

    #[test]
    fn test_is_option_source() {
        let err: ProspectorError = OptionSourceError::transport("connection refused").into();
        assert!(err.is_option_source());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_predicates() {
        assert!(ValidationError::MissingApiKey.is_missing_api_key());
        assert!(!ValidationError::MissingApiKey.is_empty_filter_set());
        assert!(ValidationError::EmptyFilterSet.is_empty_filter_set());
    }

    #[test]
    fn test_error_conversion_chain() {
        fn inner() -> Result<()> {
            Err(ValidationError::MissingApiKey)?
        }

        let result = inner();
        assert!(result.unwrap_err().is_validation());
    }
}
