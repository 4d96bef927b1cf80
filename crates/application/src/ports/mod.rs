mod clock;
mod http_fetcher;

pub use clock::Clock;
pub use http_fetcher::{HttpFetcher, ACCEPT_HEADER, DNS_JSON_CONTENT_TYPE};
