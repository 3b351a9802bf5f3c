// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client carrying the NASA settings and API key.

use crate::config::NasaConfig;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

const USER_AGENT: &str = concat!("StellarView/", env!("CARGO_PKG_VERSION"));

/// Cheap to clone; every clone shares the same connection pool and settings.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    settings: Arc<NasaConfig>,
}

impl Client {
    /// Builds a client with the configured timeout. The API key in
    /// `settings` must already be resolved.
    pub fn new(settings: NasaConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            settings: Arc::new(settings),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &NasaConfig {
        &self.settings
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.settings.api_key
    }

    /// Issues a GET and decodes the JSON body into `T`.
    pub async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get_bytes(url, query).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Issues a GET and returns the raw body. Non-2xx answers are errors.
    pub async fn get_bytes(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>> {
        tracing::debug!(url, "GET");
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Downloads an image body as-is.
    pub async fn image(&self, url: &str) -> Result<Vec<u8>> {
        self.get_bytes(url, &[]).await
    }
}
