// src/utils/http.rs

//! HTTP gateway: the one seam touching network state.
//!
//! The parsing core never talks to the network directly; it goes through
//! the [`HttpGateway`] trait so tests can substitute a counting stub and
//! callers can share one pooled client across fetchers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::Result;
use crate::models::HttpConfig;

/// Minimal request/response contract the core depends on.
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// GET a URL and return the UTF-8 body. Non-2xx statuses are errors.
    async fn get_text(&self, url: &str) -> Result<String>;

    /// POST a urlencoded form body and return the UTF-8 response body.
    async fn post_form(&self, url: &str, body: String) -> Result<String>;
}

/// Pooled `reqwest`-backed gateway for the live portal.
pub struct AtlasGateway {
    client: reqwest::Client,
}

impl AtlasGateway {
    /// Build a gateway from HTTP settings. Connection pooling is reqwest's;
    /// the client is cheap to clone and should be shared process-wide.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/html, */*; q=0.01"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("tr-TR,tr;q=0.9"));
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpGateway for AtlasGateway {
    async fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn post_form(&self, url: &str, body: String) -> Result<String> {
        log::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .header(
                CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .body(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_builds_from_default_config() {
        assert!(AtlasGateway::new(&HttpConfig::default()).is_ok());
    }
}
