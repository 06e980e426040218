//! Remote catalog client
//!
//! One HTTP GET against a configured endpoint returning the full product
//! collection as a JSON array. The whole catalog arrives in a single call;
//! there is no transport-level pagination and nothing is ever written back.
//!
//! The client is blocking on purpose: the fetch is the only network step in
//! the program and happens once, before any UI loop starts. A request
//! timeout keeps a dead endpoint from hanging the terminal.

mod error;

pub use error::{ApiError, Result};

use crate::catalog::Product;
use std::time::Duration;

/// HTTP client for the remote product catalog
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl CatalogClient {
    /// Build a client for the given endpoint with a request timeout
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the underlying HTTP client cannot be
    /// constructed (e.g. TLS backend initialization fails).
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// The endpoint this client fetches from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the entire product collection
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails, the server answers with a
    /// non-success status, or the body is not a JSON array of products.
    pub fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self.http.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        response.json().map_err(Into::into)
    }
}
