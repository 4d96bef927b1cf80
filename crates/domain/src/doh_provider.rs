use crate::{DomainError, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_PROVIDERS: [&str; 3] = [
    "https://doh.pub/dns-query",
    "https://doh.360.cn/resolve",
    "https://dns.alidns.com/resolve",
];

/// A DoH JSON API endpoint, e.g. `https://dns.alidns.com/resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DohProvider {
    url: Arc<str>,
}

impl DohProvider {
    pub fn new(url: impl AsRef<str>) -> Result<Self, DomainError> {
        let url = url.as_ref().trim();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| {
                DomainError::InvalidProvider(format!("{} is not an http(s) URL", url))
            })?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(DomainError::InvalidProvider(format!(
                "{} has no host",
                url
            )));
        }
        Ok(Self { url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `<url>?name=<name>&type=<TYPE>`, appending to an existing query string.
    pub fn query_url(&self, name: &str, record_type: RecordType) -> Result<String, DomainError> {
        validate_domain_name(name)?;
        let separator = if self.url.contains('?') { '&' } else { '?' };
        Ok(format!(
            "{}{}name={}&type={}",
            self.url, separator, name, record_type
        ))
    }

    pub fn defaults() -> Vec<DohProvider> {
        DEFAULT_PROVIDERS
            .iter()
            .map(|url| DohProvider {
                url: Arc::from(*url),
            })
            .collect()
    }
}

/// Only characters that can appear in a hostname are accepted, so a name can
/// be placed in a query string without encoding.
pub fn validate_domain_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "Domain cannot be empty".to_string(),
        ));
    }
    if name.len() > 253 {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds 253 characters",
            name
        )));
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    if !valid {
        return Err(DomainError::InvalidDomainName(format!(
            "{} contains invalid characters",
            name
        )));
    }
    Ok(())
}

impl fmt::Display for DohProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl FromStr for DohProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DohProvider {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DohProvider> for String {
    fn from(provider: DohProvider) -> Self {
        provider.url.to_string()
    }
}
