//! HTTP client for the building permits resource.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{PermitQuery, Query},
    types::Permit,
    user_agent::get_user_agent,
    Error,
};

/// Production open-data portal.
pub const DEFAULT_BASE_URL: &str = "https://data.winnipeg.ca";
/// Socrata identifier of the building permits dataset.
pub const DEFAULT_DATASET: &str = "it4w-cpf4";

/// HTTP client for a Socrata resource endpoint.
///
/// Each request builds a fresh `reqwest::Client`. No timeout is applied
/// unless one is set with [`Client::with_timeout`].
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://data.winnipeg.ca`.
    base_api_url: String,
    /// Dataset identifier, the `<id>` in `/resource/<id>.json`.
    dataset: String,
    timeout: Option<Duration>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production permits dataset.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            timeout: None,
        }
    }

    /// Queries a different dataset on the same portal.
    pub fn with_dataset(mut self, dataset: &str) -> Self {
        self.dataset = dataset.to_string();
        self
    }

    /// Fails requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn resource_path(&self) -> String {
        format!("/resource/{}.json", self.dataset)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);

        let mut builder = reqwest::Client::builder().user_agent(get_user_agent());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedBody
        })?;

        Ok(parsed)
    }

    /// Returns the full request URL for `query` without sending it.
    pub fn permits_url(&self, query: &PermitQuery) -> Result<Url, Error> {
        self.get_url(&self.resource_path(), Some(query))
    }

    /// Fetches the permits matching the given query.
    pub async fn get_permits(&self, query: &PermitQuery) -> Result<Vec<Permit>, Error> {
        self.get::<Vec<Permit>, PermitQuery>(&self.resource_path(), Some(query))
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
