//! Ferrous DoH Domain Layer
pub mod config;
pub mod doh_provider;
pub mod doh_response;
pub mod errors;
pub mod ip_set;
pub mod record_type;
pub mod txt_record;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use doh_provider::{validate_domain_name, DohProvider, DEFAULT_PROVIDERS};
pub use doh_response::{DohAnswer, DohResponse};
pub use errors::DomainError;
pub use ip_set::IpSet;
pub use record_type::RecordType;
pub use txt_record::TxtRecord;

/// Decodes a raw TXT payload into its field mapping.
pub fn parse_data(raw: &str) -> TxtRecord {
    TxtRecord::parse(raw)
}
