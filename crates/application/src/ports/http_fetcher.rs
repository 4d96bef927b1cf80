use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::DomainError;
use std::time::Duration;

pub const ACCEPT_HEADER: &str = "accept";
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Single HTTP GET bounded by `timeout`.
///
/// Implementations return the body of a successful (2xx) response. Anything
/// else, including an elapsed timeout, is an error.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Bytes, DomainError>;
}
