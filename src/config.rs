//! Configuration for the remote option sources.
//!
//! The [`OptionsConfig`] struct controls where the two enumerable option
//! lists (industries, technologies) are fetched from and how long a fetch
//! may take before it is treated like any other failure.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use prospector::OptionsConfig;
//!
//! // Use the default endpoints
//! let config = OptionsConfig::default();
//!
//! // Point at a mirror with a tighter timeout
//! let config = OptionsConfig {
//!     timeout: Duration::from_secs(3),
//!     ..Default::default()
//! };
//! ```

use std::time::Duration;

/// Default endpoint for the industries option list.
pub const DEFAULT_INDUSTRIES_URL: &str =
    "https://static.companydiscovery.io/options/industries.json";

/// Default endpoint for the technologies option list.
pub const DEFAULT_TECHNOLOGIES_URL: &str =
    "https://static.companydiscovery.io/options/technologies.json";

/// Default fetch timeout.
///
/// Without a timeout a hung endpoint would delay catalog load indefinitely;
/// with one, a hang degrades like any other fetch failure.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote option-source configuration.
///
/// All fields have working defaults. Use struct update syntax to override
/// specific settings:
///
/// ```rust
/// use prospector::OptionsConfig;
///
/// let config = OptionsConfig {
///     industries_url: "https://mirror.example.com/industries.json".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionsConfig {
    /// Endpoint returning the industries list (JSON array of strings).
    pub industries_url: String,

    /// Endpoint returning the technologies list (JSON array of strings).
    pub technologies_url: String,

    /// Per-request timeout for both fetches.
    pub timeout: Duration,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            industries_url: DEFAULT_INDUSTRIES_URL.to_string(),
            technologies_url: DEFAULT_TECHNOLOGIES_URL.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl OptionsConfig {
    /// Creates a new OptionsConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config pointing both lists at custom endpoints.
    pub fn with_endpoints(
        industries_url: impl Into<String>,
        technologies_url: impl Into<String>,
    ) -> Self {
        Self {
            industries_url: industries_url.into(),
            technologies_url: technologies_url.into(),
            ..Default::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Called by [`OptionCatalog::load()`](crate::options::OptionCatalog::load).
    /// A config that fails validation is treated like a failed fetch: the
    /// catalog degrades to empty lists rather than erroring.
    ///
    /// Returns `false` if either URL is empty or the timeout is zero.
    pub fn is_valid(&self) -> bool {
        !self.industries_url.trim().is_empty()
            && !self.technologies_url.trim().is_empty()
            && !self.timeout.is_zero()
    }
}
