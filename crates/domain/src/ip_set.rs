use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::Ipv4Addr;

/// Deduplicated IPv4 addresses, iterated in ascending numeric order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpSet {
    addrs: BTreeSet<Ipv4Addr>,
}

impl IpSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn localhost() -> Self {
        Self::from_iter([Ipv4Addr::LOCALHOST])
    }

    pub fn extend_from(&mut self, other: IpSet) {
        self.addrs.extend(other.addrs);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ipv4Addr> {
        self.addrs.iter()
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.addrs.iter().map(Ipv4Addr::to_string).collect()
    }
}

impl FromIterator<Ipv4Addr> for IpSet {
    fn from_iter<I: IntoIterator<Item = Ipv4Addr>>(iter: I) -> Self {
        Self {
            addrs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for IpSet {
    type Item = Ipv4Addr;
    type IntoIter = std::collections::btree_set::IntoIter<Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.into_iter()
    }
}
