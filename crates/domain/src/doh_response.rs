use crate::{DomainError, IpSet, RecordType};
use serde::Deserialize;
use std::net::Ipv4Addr;

/// JSON envelope returned by DoH JSON APIs (`application/dns-json`).
///
/// Only the fields the resolver reads are modelled; everything else in the
/// envelope (`TC`, `RD`, `Question`, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DohResponse {
    #[serde(rename = "Status", default)]
    pub status: Option<u32>,

    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DohAnswer>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DohAnswer {
    #[serde(rename = "type")]
    pub record_type: u16,

    /// Absent on some record types (e.g. RRSIG on certain providers).
    #[serde(default)]
    pub data: String,
}

impl DohResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::MalformedResponse(e.to_string()))
    }

    /// `data` of every answer of the given type, in envelope order.
    pub fn answers_of(&self, record_type: RecordType) -> impl Iterator<Item = &str> {
        let code = record_type.code();
        self.answer
            .iter()
            .flatten()
            .filter(move |a| a.record_type == code)
            .map(|a| a.data.as_str())
    }

    /// IPv4 addresses from type-1 answers. Unparseable data is skipped.
    pub fn a_records(&self) -> IpSet {
        self.answers_of(RecordType::A)
            .filter_map(|data| data.trim().parse::<Ipv4Addr>().ok())
            .collect()
    }
}
