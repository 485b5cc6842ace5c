//! Integration tests for remote option-list loading.
//!
//! Serves fixture payloads from an in-process axum server and checks the
//! fail-silent catalog contract: a well-formed JSON array of strings loads,
//! everything else degrades to an empty list without an error.

use std::time::Duration;

use axum::{routing::get, Json, Router};
use prospector::options::{OptionCatalog, OptionSource};
use prospector::{OptionsConfig, RemoteOptionSource};
use serde_json::json;
use tokio::net::TcpListener;

/// Serves the router on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn fixture_router() -> Router {
    Router::new()
        .route(
            "/industries.json",
            get(|| async { Json(json!(["fintech", "health", "logistics"])) }),
        )
        .route(
            "/technologies.json",
            get(|| async { Json(json!(["rust", "shopify"])) }),
        )
        .route(
            "/not-a-list.json",
            get(|| async { Json(json!({"industries": ["fintech"]})) }),
        )
        .route(
            "/mixed-types.json",
            get(|| async { Json(json!(["fintech", 42, "health"])) }),
        )
}

const TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================================
// RemoteOptionSource contract
// ============================================================================

#[tokio::test]
async fn fetches_a_well_formed_list() {
    let base = serve(fixture_router()).await;
    let source = RemoteOptionSource::new(format!("{base}/industries.json"), TIMEOUT);

    let values = source.fetch().await.unwrap();
    assert_eq!(values, vec!["fintech", "health", "logistics"]);
}

#[tokio::test]
async fn non_list_payload_is_an_error() {
    let base = serve(fixture_router()).await;
    let source = RemoteOptionSource::new(format!("{base}/not-a-list.json"), TIMEOUT);

    assert!(source.fetch().await.is_err());
}

#[tokio::test]
async fn list_with_non_string_members_is_an_error() {
    let base = serve(fixture_router()).await;
    let source = RemoteOptionSource::new(format!("{base}/mixed-types.json"), TIMEOUT);

    assert!(source.fetch().await.is_err());
}

#[tokio::test]
async fn missing_endpoint_is_an_error() {
    let base = serve(fixture_router()).await;
    let source = RemoteOptionSource::new(format!("{base}/absent.json"), TIMEOUT);

    assert!(source.fetch().await.is_err());
}

// ============================================================================
// Catalog loading
// ============================================================================

#[tokio::test]
async fn catalog_loads_both_lists() {
    let base = serve(fixture_router()).await;
    let config = OptionsConfig {
        industries_url: format!("{base}/industries.json"),
        technologies_url: format!("{base}/technologies.json"),
        timeout: TIMEOUT,
    };

    let catalog = OptionCatalog::load(&config).await;
    assert_eq!(catalog.industries, vec!["fintech", "health", "logistics"]);
    assert_eq!(catalog.technologies, vec!["rust", "shopify"]);
}

#[tokio::test]
async fn one_bad_list_does_not_poison_the_other() {
    let base = serve(fixture_router()).await;
    let config = OptionsConfig {
        industries_url: format!("{base}/not-a-list.json"),
        technologies_url: format!("{base}/technologies.json"),
        timeout: TIMEOUT,
    };

    let catalog = OptionCatalog::load(&config).await;
    assert!(catalog.industries.is_empty());
    assert_eq!(catalog.technologies, vec!["rust", "shopify"]);
}

#[tokio::test]
async fn unreachable_endpoints_degrade_to_empty() {
    // Nothing listens on this port; both fetches fail, load still succeeds
    let config = OptionsConfig {
        industries_url: "http://127.0.0.1:9/industries.json".into(),
        technologies_url: "http://127.0.0.1:9/technologies.json".into(),
        timeout: Duration::from_millis(500),
    };

    let catalog = OptionCatalog::load(&config).await;
    assert!(catalog.is_empty());
}
