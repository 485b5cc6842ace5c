//! Integration tests for submission-request assembly and wire format.

use prospector::{CompanyFilter, ListField, Page, ValidationError, PAGE_LIMIT};
use serde_json::json;

fn minimal_filter() -> CompanyFilter {
    CompanyFilter {
        query: "fintech".into(),
        ..Default::default()
    }
}

// ============================================================================
// Validation ordering
// ============================================================================

#[test]
fn missing_api_key_wins_over_empty_filters() {
    // Both conditions hold; the key check comes first
    let err = CompanyFilter::default()
        .build_submission_request("  ", Page::FIRST)
        .unwrap_err();
    assert_eq!(err, ValidationError::MissingApiKey);
}

#[test]
fn empty_filters_surface_once_key_is_present() {
    let err = CompanyFilter::default()
        .build_submission_request("sk-key", Page::FIRST)
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyFilterSet);
}

#[test]
fn whitespace_only_key_is_missing() {
    let err = minimal_filter()
        .build_submission_request("\t \n", Page::FIRST)
        .unwrap_err();
    assert_eq!(err, ValidationError::MissingApiKey);
}

// ============================================================================
// Payload contents
// ============================================================================

#[test]
fn request_carries_trimmed_key_page_and_limit() {
    let request = minimal_filter()
        .build_submission_request(" sk-key ", Page::new(3))
        .unwrap();

    assert_eq!(request.api_key, "sk-key");
    assert_eq!(request.page, 3);
    assert_eq!(request.limit, PAGE_LIMIT);
    assert_eq!(PAGE_LIMIT, 100);
}

#[test]
fn wire_format_uses_exact_keys() {
    let mut filter = minimal_filter();
    filter.toggle(ListField::Countries, "UK");

    let request = filter
        .build_submission_request("sk-key", Page::FIRST)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "apiKey": "sk-key",
            "filters": {
                "query": "fintech",
                "headquarters_location": {"include": [{"country": "UK"}]}
            },
            "page": 1,
            "limit": 100
        })
    );
}

// ============================================================================
// Page navigation
// ============================================================================

#[test]
fn page_floors_at_one_through_submission() {
    let mut page = Page::FIRST;
    for _ in 0..10 {
        page = page.prev();
    }

    let request = minimal_filter()
        .build_submission_request("sk-key", page)
        .unwrap();
    assert_eq!(request.page, 1);
}

#[test]
fn page_navigation_round_trip() {
    let page = Page::FIRST.next().next().next().prev();
    let request = minimal_filter()
        .build_submission_request("sk-key", page)
        .unwrap();
    assert_eq!(request.page, 3);
}
