use ferrous_doh_application::services::ExpiringCache;
use ferrous_doh_application::use_cases::{LookupARecordsUseCase, LookupTxtUseCase};
use ferrous_doh_domain::{DohProvider, IpSet, TxtRecord};
use std::sync::Arc;

/// TXT and A lookups over DoH JSON APIs with per-instance caches.
///
/// Build one with [`DohResolverBuilder`](super::DohResolverBuilder). Every
/// lookup accepts an optional provider list that replaces the configured
/// defaults for that call only.
pub struct DohResolver {
    txt: LookupTxtUseCase,
    a_records: LookupARecordsUseCase,
    txt_cache: Arc<ExpiringCache<TxtRecord>>,
    a_cache: Arc<ExpiringCache<IpSet>>,
    default_providers: Arc<[DohProvider]>,
}

impl DohResolver {
    pub(super) fn new(
        txt: LookupTxtUseCase,
        a_records: LookupARecordsUseCase,
        txt_cache: Arc<ExpiringCache<TxtRecord>>,
        a_cache: Arc<ExpiringCache<IpSet>>,
        default_providers: Arc<[DohProvider]>,
    ) -> Self {
        Self {
            txt,
            a_records,
            txt_cache,
            a_cache,
            default_providers,
        }
    }

    /// `None` when no provider returned a TXT record in the payload format.
    pub async fn lookup_txt(
        &self,
        host: &str,
        providers: Option<&[DohProvider]>,
    ) -> Option<TxtRecord> {
        self.txt.execute(host, providers).await
    }

    pub async fn lookup_a_records(
        &self,
        domain: &str,
        providers: Option<&[DohProvider]>,
    ) -> IpSet {
        self.a_records.execute(domain, providers).await
    }

    pub fn parse_data(raw: &str) -> TxtRecord {
        TxtRecord::parse(raw)
    }

    pub fn default_providers(&self) -> &[DohProvider] {
        &self.default_providers
    }

    /// Drops expired entries from both caches.
    pub fn sweep_expired(&self) -> usize {
        self.txt_cache.sweep_expired() + self.a_cache.sweep_expired()
    }

    pub fn clear_cache(&self) {
        self.txt_cache.clear();
        self.a_cache.clear();
    }

    pub fn cached_entries(&self) -> usize {
        self.txt_cache.len() + self.a_cache.len()
    }
}
