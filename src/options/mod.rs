//! Option sources for the multi-select filter fields.
//!
//! Two kinds of option lists feed the filter form:
//!
//! - **Fixed tables**, part of the search API's contract and reproduced here
//!   verbatim: headcount buckets, company types, funding series, and the
//!   headquarters country table.
//! - **Remote lists** (industries, technologies), fetched once per catalog
//!   from static endpoints via an [`OptionSource`].
//!
//! # Fail-silent loading
//!
//! Remote option lists are optional enrichment, not required data. A failed
//! fetch (transport error, wrong payload shape, timeout) logs a warning and
//! exposes an empty list; it never fails catalog load. Completion only ever
//! adds available choices — it never resets selections, which reference
//! option values, not list positions.

mod remote;

pub use remote::RemoteOptionSource;

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::config::OptionsConfig;
use crate::error::OptionSourceError;
use crate::types::Country;

// ============================================================================
// Fixed option tables (search API contract)
// ============================================================================

/// Employee headcount buckets accepted by the search API.
pub const HEADCOUNT_BUCKETS: [&str; 8] = [
    "1-10",
    "11-50",
    "51-200",
    "201-500",
    "501-1000",
    "1001-5000",
    "5001-10000",
    "10001+",
];

/// Company type categories accepted by the search API.
pub const COMPANY_TYPES: [&str; 10] = [
    "educational",
    "government_agency",
    "nonprofit",
    "partnership",
    "privately_held",
    "public_company",
    "self_employed",
    "sole_proprietorship",
    "subsidiary",
    "other",
];

/// Funding-stage series accepted by the search API.
pub const FUNDING_SERIES: [&str; 9] = [
    "pre_seed",
    "seed",
    "pre_series_a",
    "series_a",
    "pre_series_b",
    "series_b",
    "pre_series_c",
    "series_c+",
    "other",
];

/// Headquarters country table: API code plus display label.
pub const COUNTRIES: [Country; 10] = [
    Country { code: "AU", label: "Australia" },
    Country { code: "US", label: "United States" },
    Country { code: "UK", label: "United Kingdom" },
    Country { code: "NZ", label: "New Zealand" },
    Country { code: "CA", label: "Canada" },
    Country { code: "DE", label: "Germany" },
    Country { code: "FR", label: "France" },
    Country { code: "NL", label: "Netherlands" },
    Country { code: "SG", label: "Singapore" },
    Country { code: "IN", label: "India" },
];

/// Looks up a country by its API code.
pub fn country_by_code(code: &str) -> Option<Country> {
    COUNTRIES.iter().copied().find(|c| c.code == code)
}

// ============================================================================
// OptionSource trait
// ============================================================================

/// A one-shot source of enumerable option values.
///
/// Implementations fetch a list of plain strings from somewhere external.
/// The crate ships [`RemoteOptionSource`] (HTTP); tests and embedders can
/// provide their own.
///
/// # Implementing a Custom Source
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use prospector::options::OptionSource;
/// use prospector::OptionSourceError;
///
/// struct FixtureSource(Vec<String>);
///
/// #[async_trait]
/// impl OptionSource for FixtureSource {
///     async fn fetch(&self) -> Result<Vec<String>, OptionSourceError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait OptionSource: Send + Sync {
    /// Fetches the option list.
    ///
    /// # Errors
    ///
    /// Returns [`OptionSourceError`] on transport failure or when the
    /// payload is not a list of plain strings.
    async fn fetch(&self) -> Result<Vec<String>, OptionSourceError>;
}

// ============================================================================
// OptionCatalog
// ============================================================================

/// The available choices for the remotely-enumerated filter fields.
///
/// Loaded once at form startup via [`OptionCatalog::load()`]. Either list
/// may be empty when its fetch failed; the corresponding multi-select simply
/// offers no choices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    /// Available industry values ([`QueryObject::industry`](crate::QueryObject)).
    pub industries: Vec<String>,

    /// Available technology values ([`QueryObject::technology`](crate::QueryObject)).
    pub technologies: Vec<String>,
}

impl OptionCatalog {
    /// Loads both option lists from the configured endpoints.
    ///
    /// The two fetches run concurrently and each completes at most once.
    /// This method never fails: any fetch error degrades that list to empty.
    /// An invalid config degrades both lists the same way.
    #[instrument(skip(config), fields(industries = %config.industries_url, technologies = %config.technologies_url))]
    pub async fn load(config: &OptionsConfig) -> Self {
        if !config.is_valid() {
            warn!("Invalid option-source config; offering no remote options");
            return Self::default();
        }

        let industries = RemoteOptionSource::new(&config.industries_url, config.timeout);
        let technologies = RemoteOptionSource::new(&config.technologies_url, config.timeout);

        Self::load_from(&industries, &technologies).await
    }

    /// Loads the catalog from arbitrary sources.
    ///
    /// Useful for tests and embedders with non-HTTP option storage. The
    /// fail-silent policy applies here too.
    pub async fn load_from(
        industries: &dyn OptionSource,
        technologies: &dyn OptionSource,
    ) -> Self {
        let (industries, technologies) = tokio::join!(
            fetch_or_empty(industries, "industries"),
            fetch_or_empty(technologies, "technologies"),
        );

        Self {
            industries,
            technologies,
        }
    }

    /// Returns true if neither remote list produced any options.
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty() && self.technologies.is_empty()
    }
}

/// Fetches one list, swallowing errors into an empty list.
async fn fetch_or_empty(source: &dyn OptionSource, field: &str) -> Vec<String> {
    match source.fetch().await {
        Ok(values) => values,
        Err(err) => {
            warn!(field, error = %err, "Option list fetch failed; offering no choices");
            Vec::new()
        }
    }
}
