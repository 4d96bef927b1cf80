//! HTTPS transport for DoH JSON queries
//!
//! Issues plain `GET` requests against a DoH JSON API and returns the raw
//! response body. Envelope decoding is left to the caller.
//!
//! ```text
//! GET /resolve?name=example.com&type=TXT HTTP/1.1
//! Accept: application/dns-json
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::HttpFetcher;
use ferrous_doh_domain::DomainError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared client with connection pooling. Timeouts are applied per request.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// [`HttpFetcher`] backed by reqwest.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: SHARED_CLIENT.clone(),
        }
    }

    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Bytes, DomainError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| DomainError::TransportFailed {
            server: server_of(url).to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                server: server_of(url).to_string(),
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| DomainError::TransportFailed {
                server: server_of(url).to_string(),
                reason: format!("failed to read body: {}", e),
            })
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Bytes, DomainError> {
        debug!(url = %url, "Sending DoH query");

        // One deadline covers connect, headers and body.
        let body = tokio::time::timeout(timeout, self.get(url, headers))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server_of(url).to_string(),
            })??;

        debug!(url = %url, response_len = body.len(), "DoH response received");
        Ok(body)
    }
}

/// Provider part of a query URL, used in error reports.
fn server_of(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
