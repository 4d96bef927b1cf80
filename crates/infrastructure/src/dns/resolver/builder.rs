use super::core::DohResolver;
use crate::dns::clock::SystemClock;
use crate::dns::transport::ReqwestFetcher;
use ferrous_doh_application::ports::{Clock, HttpFetcher};
use ferrous_doh_application::services::ExpiringCache;
use ferrous_doh_application::use_cases::{LookupARecordsUseCase, LookupTxtUseCase};
use ferrous_doh_domain::{DohProvider, ResolverConfig};
use std::sync::Arc;
use tracing::info;

pub struct DohResolverBuilder {
    config: ResolverConfig,
    fetcher: Option<Arc<dyn HttpFetcher>>,
    clock: Option<Arc<dyn Clock>>,
}

impl DohResolverBuilder {
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            fetcher: None,
            clock: None,
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_providers(mut self, providers: Vec<DohProvider>) -> Self {
        self.config.providers = providers;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn HttpFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> DohResolver {
        info!(
            providers = self.config.providers.len(),
            timeout_ms = self.config.timeout_ms,
            cache_ttl_secs = self.config.cache_ttl_secs,
            "Building DoH resolver"
        );

        let fetcher = self
            .fetcher
            .unwrap_or_else(|| Arc::new(ReqwestFetcher::new()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let providers: Arc<[DohProvider]> = self.config.providers.clone().into();
        let timeout = self.config.timeout();

        let txt_cache = Arc::new(ExpiringCache::new(self.config.cache_ttl(), clock.clone()));
        let a_cache = Arc::new(ExpiringCache::new(self.config.cache_ttl(), clock));

        let txt = LookupTxtUseCase::new(
            fetcher.clone(),
            txt_cache.clone(),
            providers.clone(),
            timeout,
        );
        let a_records =
            LookupARecordsUseCase::new(fetcher, a_cache.clone(), providers.clone(), timeout);

        DohResolver::new(txt, a_records, txt_cache, a_cache, providers)
    }
}

impl Default for DohResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
