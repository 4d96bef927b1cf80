use crate::ports::HttpFetcher;
use crate::services::ExpiringCache;
use ferrous_doh_domain::{
    validate_domain_name, DohProvider, DohResponse, DomainError, IpSet, RecordType,
};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Resolves A records by querying every provider at once and taking the
/// union of their answers.
///
/// Never fails: a provider that errors contributes nothing, and when all of
/// them do the result is an empty set. Empty results are not cached.
pub struct LookupARecordsUseCase {
    fetcher: Arc<dyn HttpFetcher>,
    cache: Arc<ExpiringCache<IpSet>>,
    default_providers: Arc<[DohProvider]>,
    timeout: Duration,
}

impl LookupARecordsUseCase {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        cache: Arc<ExpiringCache<IpSet>>,
        default_providers: Arc<[DohProvider]>,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            cache,
            default_providers,
            timeout,
        }
    }

    pub async fn execute(&self, domain: &str, providers: Option<&[DohProvider]>) -> IpSet {
        if domain.eq_ignore_ascii_case("localhost") {
            debug!("Skipping DNS lookup for localhost");
            return IpSet::localhost();
        }

        if let Err(e) = validate_domain_name(domain) {
            warn!(domain = %domain, error = %e, "Refusing lookup");
            return IpSet::new();
        }

        self.cache.sweep_expired();

        if let Some(ips) = self.cache.get(domain) {
            debug!(domain = %domain, count = ips.len(), "A record cache hit");
            return ips;
        }

        let providers = providers.unwrap_or(&self.default_providers[..]);
        debug!(domain = %domain, providers = providers.len(), "Querying all providers");

        let results = join_all(
            providers
                .iter()
                .map(|provider| self.query_provider(provider, domain)),
        )
        .await;

        let mut ips = IpSet::new();
        for (provider, result) in providers.iter().zip(results) {
            match result {
                Ok(found) => {
                    debug!(provider = %provider, count = found.len(), "Provider answered");
                    ips.extend_from(found);
                }
                Err(e) => {
                    warn!(domain = %domain, provider = %provider, error = %e, "Provider query failed");
                }
            }
        }

        if ips.is_empty() {
            warn!(domain = %domain, "No A records found");
        } else {
            self.cache.put(domain, ips.clone());
            info!(domain = %domain, count = ips.len(), "A records resolved");
        }

        ips
    }

    async fn query_provider(
        &self,
        provider: &DohProvider,
        domain: &str,
    ) -> Result<IpSet, DomainError> {
        let url = provider.query_url(domain, RecordType::A)?;
        let body = self.fetcher.fetch(&url, &[], self.timeout).await?;
        let response = DohResponse::from_slice(&body)?;
        Ok(response.a_records())
    }
}
