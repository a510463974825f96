//! Plain HTTP page fetcher for company websites.
//!
//! Pages are fetched once per analysis with a browser user agent. Nothing is
//! rendered: sites that only expose prices after client-side scripting yield an
//! empty price list.

mod url;

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

pub use url::normalize_site_url;

/// Fetches raw HTML for company websites.
///
/// Stateless apart from its fixed timeout and user agent; every call performs a
/// fresh request.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given total request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the document body at `url` as text.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] for any non-2xx response.
    /// - [`FetchError::Http`] on network failure, timeout, or an undecodable body.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9,en;q=0.8")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
