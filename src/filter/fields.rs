//! The filter accumulator: independently-settable search criteria.
//!
//! [`CompanyFilter`] holds one field per search criterion. Fields are
//! independent: setting one never reads or changes another, and no
//! validation happens at write time. Validation lives entirely in
//! [`build_query()`](CompanyFilter::build_query), which projects the
//! current values into a [`QueryObject`](crate::QueryObject).
//!
//! Values live for one form session: created empty, mutated only by direct
//! user interaction, and dropped with the form. Nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::types::MatchMode;

/// Accumulated filter state for a company-discovery search.
///
/// All fields default to empty/unset. Scalar text and the year bounds are
/// free-text strings exactly as typed; set-valued fields hold the selected
/// values in selection order (use [`toggle()`](Self::toggle) to keep them
/// duplicate-free).
///
/// # Example
///
/// ```rust
/// use prospector::{CompanyFilter, ListField, MatchMode};
///
/// let mut filter = CompanyFilter::default();
/// filter.query = "payments".to_string();
/// filter.toggle(ListField::Countries, "US");
/// filter.match_mode = MatchMode::All;
///
/// let query = filter.build_query().unwrap();
/// assert!(query.headquarters_location.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFilter {
    /// Free-text search query.
    pub query: String,

    /// Comma-separated company names/domains to find similar companies to.
    pub similar_to: String,

    /// Selected headquarters country codes (see [`COUNTRIES`](crate::options::COUNTRIES)).
    pub countries: Vec<String>,

    /// Selected industry values (remote option list).
    pub industries: Vec<String>,

    /// Selected headcount buckets (see [`HEADCOUNT_BUCKETS`](crate::options::HEADCOUNT_BUCKETS)).
    pub headcounts: Vec<String>,

    /// Selected company types (see [`COMPANY_TYPES`](crate::options::COMPANY_TYPES)).
    pub company_types: Vec<String>,

    /// Selected technology values (remote option list).
    pub technologies: Vec<String>,

    /// Selected funding series (see [`FUNDING_SERIES`](crate::options::FUNDING_SERIES)).
    pub funding_series: Vec<String>,

    /// Lower founding-year bound, free text. Parsed only at projection time.
    pub year_from: String,

    /// Upper founding-year bound, free text. Parsed only at projection time.
    pub year_to: String,

    /// Comma-separated keywords.
    pub keywords: String,

    /// Match mode applied to the keyword and technology filters.
    pub match_mode: MatchMode,
}

/// Names the set-valued fields of [`CompanyFilter`] for toggle-style updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListField {
    /// Headquarters country codes.
    Countries,
    /// Industry values.
    Industries,
    /// Headcount buckets.
    Headcounts,
    /// Company type categories.
    CompanyTypes,
    /// Technology values.
    Technologies,
    /// Funding series.
    FundingSeries,
}

impl CompanyFilter {
    /// Creates an empty filter (same as `Default`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles membership of `value` in a set-valued field.
    ///
    /// Adds the value if absent, removes it if present. Selection order is
    /// preserved and duplicates are impossible by construction: toggling the
    /// same value twice restores the original set.
    pub fn toggle(&mut self, field: ListField, value: impl Into<String>) {
        let value = value.into();
        let list = self.list_mut(field);
        match list.iter().position(|v| *v == value) {
            Some(index) => {
                list.remove(index);
            }
            None => list.push(value),
        }
    }

    /// Returns true if `value` is currently selected in the given field.
    pub fn is_selected(&self, field: ListField, value: &str) -> bool {
        self.list(field).iter().any(|v| v == value)
    }

    /// Returns the selected values of a set-valued field, in selection order.
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Countries => &self.countries,
            ListField::Industries => &self.industries,
            ListField::Headcounts => &self.headcounts,
            ListField::CompanyTypes => &self.company_types,
            ListField::Technologies => &self.technologies,
            ListField::FundingSeries => &self.funding_series,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Countries => &mut self.countries,
            ListField::Industries => &mut self.industries,
            ListField::Headcounts => &mut self.headcounts,
            ListField::CompanyTypes => &mut self.company_types,
            ListField::Technologies => &mut self.technologies,
            ListField::FundingSeries => &mut self.funding_series,
        }
    }

    /// Clears every field back to its empty/default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
