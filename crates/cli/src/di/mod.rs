use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::dns::{DohResolver, DohResolverBuilder};

pub fn build_resolver(config: &Config) -> DohResolver {
    DohResolverBuilder::new()
        .with_config(config.resolver.clone())
        .build()
}
