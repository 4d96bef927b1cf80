use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid DoH provider: {0}")]
    InvalidProvider(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport request to {server} failed: {reason}")]
    TransportFailed { server: String, reason: String },

    #[error("DoH server {server} returned HTTP {status}")]
    HttpStatus { server: String, status: u16 },

    #[error("Malformed DoH response: {0}")]
    MalformedResponse(String),

    #[error("No usable answer from {server}")]
    NoUsableAnswer { server: String },
}
