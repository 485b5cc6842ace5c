//! HTTP-backed option source.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::OptionSourceError;
use crate::options::OptionSource;

/// An [`OptionSource`] that fetches a JSON list of strings over HTTP.
///
/// One GET per [`fetch()`](OptionSource::fetch) call, no retries, no
/// backoff. The endpoint contract is a bare JSON array of plain strings;
/// any other payload shape is rejected as [`OptionSourceError::BadShape`].
#[derive(Clone, Debug)]
pub struct RemoteOptionSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl RemoteOptionSource {
    /// Creates a source for the given endpoint with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    /// Creates a source reusing an existing HTTP client.
    ///
    /// Callers already holding a [`reqwest::Client`] (connection pools are
    /// per-client) can share it across both option sources.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl OptionSource for RemoteOptionSource {
    async fn fetch(&self) -> Result<Vec<String>, OptionSourceError> {
        let payload: serde_json::Value = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let items = payload
            .as_array()
            .ok_or_else(|| OptionSourceError::bad_shape(&self.url))?;

        let values: Vec<String> = items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<_>>()
            .ok_or_else(|| OptionSourceError::bad_shape(&self.url))?;

        debug!(url = %self.url, count = values.len(), "Fetched option list");
        Ok(values)
    }
}
