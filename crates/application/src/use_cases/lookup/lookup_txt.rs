use crate::ports::{HttpFetcher, ACCEPT_HEADER, DNS_JSON_CONTENT_TYPE};
use crate::services::ExpiringCache;
use ferrous_doh_domain::{
    validate_domain_name, DohProvider, DohResponse, DomainError, RecordType, TxtRecord,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Resolves a TXT payload by trying providers one after another.
///
/// The first provider with a usable answer wins and the remaining ones are
/// never contacted. Failures are not cached, so a host that could not be
/// resolved is retried on the next call.
pub struct LookupTxtUseCase {
    fetcher: Arc<dyn HttpFetcher>,
    cache: Arc<ExpiringCache<TxtRecord>>,
    default_providers: Arc<[DohProvider]>,
    timeout: Duration,
}

impl LookupTxtUseCase {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        cache: Arc<ExpiringCache<TxtRecord>>,
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

    pub async fn execute(
        &self,
        host: &str,
        providers: Option<&[DohProvider]>,
    ) -> Option<TxtRecord> {
        if let Err(e) = validate_domain_name(host) {
            warn!(host = %host, error = %e, "Refusing lookup");
            return None;
        }

        self.cache.sweep_expired();

        if let Some(record) = self.cache.get(host) {
            debug!(host = %host, "TXT cache hit");
            return Some(record);
        }

        let providers = providers.unwrap_or(&self.default_providers[..]);
        debug!(host = %host, providers = providers.len(), "Trying TXT providers sequentially");

        for (index, provider) in providers.iter().enumerate() {
            match self.query_provider(provider, host).await {
                Ok(record) => {
                    info!(
                        host = %host,
                        provider = %provider,
                        position = index,
                        fields = record.len(),
                        "TXT record resolved"
                    );
                    self.cache.put(host, record.clone());
                    return Some(record);
                }
                Err(e) => {
                    warn!(host = %host, provider = %provider, error = %e, position = index, "Failing over");
                }
            }
        }

        error!(host = %host, providers = providers.len(), "No DNS record found");
        None
    }

    async fn query_provider(
        &self,
        provider: &DohProvider,
        host: &str,
    ) -> Result<TxtRecord, DomainError> {
        let url = provider.query_url(host, RecordType::TXT)?;
        let body = self
            .fetcher
            .fetch(
                &url,
                &[(ACCEPT_HEADER, DNS_JSON_CONTENT_TYPE)],
                self.timeout,
            )
            .await?;
        let response = DohResponse::from_slice(&body)?;

        // Hosts often publish several TXT records; use the first one in our format.
        let record = response
            .answers_of(RecordType::TXT)
            .map(TxtRecord::parse)
            .find(|record| !record.is_empty())
            .ok_or_else(|| DomainError::NoUsableAnswer {
                server: provider.to_string(),
            });
        record
    }
}
