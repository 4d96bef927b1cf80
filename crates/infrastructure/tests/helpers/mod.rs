mod doh_server_mock;

pub use doh_server_mock::{MockDohServer, MockResponse, RecordedRequest};
