//! Projection of filter state into the search API's query object.
//!
//! [`CompanyFilter::build_query()`] is a deterministic pure function from
//! field values to a [`QueryObject`]. Each field projects independently and
//! contributes its key only when non-empty; the single validation rule is
//! that the result must contain at least one key.
//!
//! # Key/shape rules
//!
//! | Field | Key | Shape |
//! |-------|-----|-------|
//! | query | `query` | trimmed string |
//! | similar_to | `similar_to` | trimmed comma-split tokens |
//! | countries | `headquarters_location` | `{include: [{country: code}]}` |
//! | industries | `industry` | `{include: [..]}` |
//! | headcounts | `headcount` | bare list, no wrapper |
//! | company_types | `company_type` | `{include: [..]}` |
//! | year_from/to | `year_founded` | `{from?, to?}`, integers |
//! | keywords | `keywords` | `{include: [..], match}` |
//! | technologies | `technology` | `{include: [..], match}` |
//! | funding_series | `funding` | `{series: [..]}` |
//!
//! Year bounds are syntactic only: each free-text bound is parsed to an
//! integer if it parses, and skipped otherwise. `from > to` passes through
//! untouched; semantic range validation is deliberately out of scope.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filter::fields::CompanyFilter;
use crate::types::MatchMode;

// ============================================================================
// QueryObject and its sub-structs
// ============================================================================

/// An include-only list filter, e.g. `industry` or `company_type`.
///
/// Include-only filters are implicitly "any of these values" and carry no
/// match property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeFilter<T> {
    /// Values to match against, in selection order.
    pub include: Vec<T>,
}

/// One headquarters-location entry: `{country: code}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Country code as expected by the API.
    pub country: String,
}

/// A list filter with an explicit match mode, e.g. `keywords` or `technology`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFilter {
    /// Values to match against.
    pub include: Vec<String>,
    /// Whether all values must match or any may.
    #[serde(rename = "match")]
    pub mode: MatchMode,
}

/// Founding-year bounds. Each bound is present only if it was supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
}

impl YearRange {
    fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// The funding filter: `{series: [..]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingFilter {
    /// Selected funding-stage series.
    pub series: Vec<String>,
}

/// The nested query object sent to the search API.
///
/// Every field is optional and serializes to no key at all when unset; an
/// empty source field never produces an empty array or null placeholder.
/// Construct via [`CompanyFilter::build_query()`] rather than by hand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryObject {
    /// Free-text query, trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Companies to find similar companies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_to: Option<Vec<String>>,

    /// Headquarters-location filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters_location: Option<IncludeFilter<CountryEntry>>,

    /// Industry filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<IncludeFilter<String>>,

    /// Headcount buckets. Bare list, no wrapper object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headcount: Option<Vec<String>>,

    /// Company-type filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<IncludeFilter<String>>,

    /// Founding-year bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_founded: Option<YearRange>,

    /// Keyword filter with match mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<MatchFilter>,

    /// Technology filter with match mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<MatchFilter>,

    /// Funding-series filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<FundingFilter>,
}

impl QueryObject {
    /// Returns true if no filter contributed a key.
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.similar_to.is_none()
            && self.headquarters_location.is_none()
            && self.industry.is_none()
            && self.headcount.is_none()
            && self.company_type.is_none()
            && self.year_founded.is_none()
            && self.keywords.is_none()
            && self.technology.is_none()
            && self.funding.is_none()
    }
}

// ============================================================================
// Projection
// ============================================================================

impl CompanyFilter {
    /// Projects the current field values into a [`QueryObject`].
    ///
    /// Pure and deterministic: same field values, same query object. Each
    /// field left at its empty/default value contributes no key.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyFilterSet`] when the projection has
    /// zero keys. No other validation happens here: a malformed year bound
    /// is silently skipped, and `from > to` passes through as-is.
    pub fn build_query(&self) -> Result<QueryObject, ValidationError> {
        let query = QueryObject {
            query: trimmed(&self.query),
            similar_to: non_empty(comma_tokens(&self.similar_to)),
            headquarters_location: non_empty(self.countries.clone()).map(|codes| IncludeFilter {
                include: codes
                    .into_iter()
                    .map(|country| CountryEntry { country })
                    .collect(),
            }),
            industry: non_empty(self.industries.clone()).map(|include| IncludeFilter { include }),
            headcount: non_empty(self.headcounts.clone()),
            company_type: non_empty(self.company_types.clone())
                .map(|include| IncludeFilter { include }),
            year_founded: year_range(&self.year_from, &self.year_to),
            keywords: non_empty(comma_tokens(&self.keywords)).map(|include| MatchFilter {
                include,
                mode: self.match_mode,
            }),
            technology: non_empty(self.technologies.clone()).map(|include| MatchFilter {
                include,
                mode: self.match_mode,
            }),
            funding: non_empty(self.funding_series.clone())
                .map(|series| FundingFilter { series }),
        };

        if query.is_empty() {
            return Err(ValidationError::EmptyFilterSet);
        }

        Ok(query)
    }
}

/// Trims a scalar text field; empty after trim means unset.
fn trimmed(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Splits comma-separated free text into trimmed non-empty tokens.
fn comma_tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lifts a list into `Some` only when it has members.
fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    (!values.is_empty()).then_some(values)
}

/// Parses the year bounds; a bound that is empty or unparseable is skipped.
fn year_range(from: &str, to: &str) -> Option<YearRange> {
    let range = YearRange {
        from: from.trim().parse().ok(),
        to: to.trim().parse().ok(),
    };
    (!range.is_empty()).then_some(range)
}
