//! Core type definitions for prospector.
//!
//! Small value types shared across the crate: the list-filter match mode,
//! the result-page counter, and the country code/label record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Match mode for multi-value filters.
///
/// Governs whether a list filter's `include` values must all match or any
/// may match. Serialized as the `match` property on keyword and technology
/// filters only; include-only filters (country, industry, company type) are
/// implicitly "any of these values" and carry no match property.
///
/// # Example
/// ```
/// use prospector::MatchMode;
///
/// assert_eq!(serde_json::to_string(&MatchMode::All).unwrap(), "\"all\"");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Any of the included values may match (the default).
    #[default]
    Any,
    /// All of the included values must match.
    All,
}

impl MatchMode {
    /// Returns the wire representation ("any" or "all").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result-page counter, 1-based.
///
/// The page number is forwarded to the search API as-is. There is no upper
/// bound (the server returns empty results past the last page), and
/// [`prev()`](Self::prev) is a no-op at page 1.
///
/// # Example
/// ```
/// use prospector::Page;
///
/// let page = Page::FIRST;
/// assert_eq!(page.prev(), Page::FIRST);
/// assert_eq!(page.next().get(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Page(u32);

impl Page {
    /// The first page.
    pub const FIRST: Page = Page(1);

    /// Creates a page counter, flooring the value at 1.
    #[inline]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    /// Returns the page number.
    #[inline]
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns the next page.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the previous page, never going below 1.
    #[inline]
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Page {
    /// Returns the first page.
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A country in the fixed headquarters-location table.
///
/// The `code` is the value the search API expects in
/// `headquarters_location.include`; the `label` is for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Country {
    /// Country code as expected by the API (e.g., "US", "UK").
    pub code: &'static str,
    /// Human-readable name (e.g., "United States").
    pub label: &'static str,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.code)
    }
}
