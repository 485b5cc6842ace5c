//! Filter accumulation and query projection.

mod fields;
mod query;

pub use fields::{CompanyFilter, ListField};
pub use query::{
    CountryEntry, FundingFilter, IncludeFilter, MatchFilter, QueryObject, YearRange,
};
