//! # prospector
//!
//! Filter accumulation and query building for company-discovery search APIs.
//!
//! prospector turns a set of independent, optional search-filter selections
//! (text fields, multi-select option groups, numeric ranges, a match-mode
//! toggle) into the nested query object a company-discovery API expects,
//! and wraps it into a ready-to-dispatch submission payload. The crate does
//! not perform the search call itself; it hands the caller a validated
//! [`SubmissionRequest`].
//!
//! ## Quick Start
//!
//! ```rust
//! use prospector::{CompanyFilter, ListField, MatchMode, Page};
//!
//! let mut filter = CompanyFilter::new();
//! filter.query = "payment infrastructure".to_string();
//! filter.toggle(ListField::Countries, "US");
//! filter.toggle(ListField::Countries, "AU");
//! filter.keywords = "saas, b2b".to_string();
//! filter.match_mode = MatchMode::All;
//!
//! let request = filter
//!     .build_submission_request("sk-your-api-key", Page::FIRST)
//!     .expect("at least one filter is set");
//!
//! // Dispatch `request` with your HTTP client of choice.
//! let body = serde_json::to_string(&request).unwrap();
//! # assert!(body.contains("\"apiKey\""));
//! ```
//!
//! ## Key Concepts
//!
//! ### Filter fields
//!
//! [`CompanyFilter`] holds one field per search criterion. Fields are
//! independent and unvalidated at write time; all shaping happens in the
//! pure projection [`CompanyFilter::build_query()`], which omits every
//! field left at its empty/default value.
//!
//! ### Option sources
//!
//! Fixed option tables (headcount buckets, company types, funding series,
//! countries) live in [`options`]. The two remotely-enumerated lists
//! (industries, technologies) load once per form via
//! [`OptionCatalog::load()`], concurrently and fail-silently: a failed
//! fetch offers no choices rather than surfacing an error.
//!
//! ### Validation
//!
//! Exactly two conditions block a submission: a missing API key and an
//! empty filter set, in that order. Nothing else is validated — a year
//! range with `from > to` is forwarded as-is by design.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;
mod filter;
mod request;
mod types;

pub mod options;

// ============================================================================
// Public API re-exports
// ============================================================================

// Filter accumulation and projection
pub use filter::{
    CompanyFilter, CountryEntry, FundingFilter, IncludeFilter, ListField, MatchFilter,
    QueryObject, YearRange,
};

// Submission
pub use request::{SubmissionRequest, PAGE_LIMIT};

// Configuration
pub use config::{
    OptionsConfig, DEFAULT_FETCH_TIMEOUT, DEFAULT_INDUSTRIES_URL, DEFAULT_TECHNOLOGIES_URL,
};

// Error handling
pub use error::{OptionSourceError, ProspectorError, Result, ValidationError};

// Core types
pub use types::{Country, MatchMode, Page};

// Option loading
pub use options::{OptionCatalog, RemoteOptionSource};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common prospector usage.
///
/// ```rust
/// use prospector::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::OptionsConfig;
    pub use crate::error::{ProspectorError, Result, ValidationError};
    pub use crate::filter::{CompanyFilter, ListField, QueryObject};
    pub use crate::options::OptionCatalog;
    pub use crate::request::SubmissionRequest;
    pub use crate::types::{MatchMode, Page};
}
