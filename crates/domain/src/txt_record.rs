//! TXT payload micro-format.
//!
//! A payload is a colon-separated list of `key=value[,value...]` segments,
//! optionally wrapped in one pair of double quotes as DoH JSON APIs return it:
//!
//! ```text
//! "web=www.example.com,www2.example.com:aff=aff.example.com:api=api.example.com"
//! ```
//!
//! The set of keys is open. [`TxtRecord::parse`] keeps every well-formed
//! segment and callers project out the fields they know about.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FIELD_WEB: &str = "web";
pub const FIELD_AFF: &str = "aff";
pub const FIELD_API: &str = "api";
pub const FIELD_APP: &str = "app";

const HTTPS_PREFIX: &str = "https://";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxtRecord {
    fields: BTreeMap<String, Vec<String>>,
}

impl TxtRecord {
    /// Decodes a raw TXT payload. Never fails: malformed segments are dropped.
    ///
    /// A segment whose value holds only separators (`k= , ,`) still assigns
    /// `k` an empty list.
    pub fn parse(raw: &str) -> Self {
        let unquoted = raw.strip_prefix('"').unwrap_or(raw);
        let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);

        let mut fields = BTreeMap::new();
        for segment in unquoted.split(':') {
            let Some((key, value)) = segment.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }

            let values: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();

            // Last occurrence of a key wins.
            fields.insert(key.to_string(), values);
        }

        Self { fields }
    }

    /// Values for `key`, or an empty slice when the payload did not carry it.
    pub fn values(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Values for `key` as URLs, adding `https://` to values without a scheme.
    pub fn endpoints(&self, key: &str) -> Vec<String> {
        self.values(key)
            .iter()
            .map(|v| {
                if v.contains("://") {
                    v.clone()
                } else {
                    format!("{}{}", HTTPS_PREFIX, v)
                }
            })
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
