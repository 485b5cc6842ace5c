//! Submission request assembly.
//!
//! A [`SubmissionRequest`] is the complete payload handed to the caller for
//! dispatch: API key, the projected filters, a page number, and the fixed
//! page-size limit. This crate builds the payload; performing the network
//! call and interpreting the response is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filter::{CompanyFilter, QueryObject};
use crate::types::Page;

/// Fixed page size forwarded with every submission.
pub const PAGE_LIMIT: u32 = 100;

/// The payload for one search submission.
///
/// Built via [`CompanyFilter::build_submission_request()`], which guarantees
/// a trimmed non-empty API key and a non-empty filter set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// API key, trimmed and non-empty.
    #[serde(rename = "apiKey")]
    pub api_key: String,

    /// The projected filters; contains at least one key.
    pub filters: QueryObject,

    /// 1-based result page to request.
    pub page: u32,

    /// Fixed page size ([`PAGE_LIMIT`]).
    pub limit: u32,
}

impl CompanyFilter {
    /// Builds a [`SubmissionRequest`] from the current filter state.
    ///
    /// The API key is checked first: a key that is empty after trimming
    /// fails with [`ValidationError::MissingApiKey`] before any filter
    /// projection happens. Otherwise this wraps
    /// [`build_query()`](Self::build_query) with the requested page and the
    /// fixed [`PAGE_LIMIT`].
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingApiKey`] if the trimmed key is empty
    /// - [`ValidationError::EmptyFilterSet`] if no filter is set
    pub fn build_submission_request(
        &self,
        api_key: &str,
        page: Page,
    ) -> Result<SubmissionRequest, ValidationError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ValidationError::MissingApiKey);
        }

        Ok(SubmissionRequest {
            api_key: api_key.to_string(),
            filters: self.build_query()?,
            page: page.get(),
            limit: PAGE_LIMIT,
        })
    }
}
