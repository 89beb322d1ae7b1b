//! Production collaborators for the availability checker.

use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{Resolver, TokioResolver};

use super::{HttpProber, NameResolver, RegistryLookup};
use crate::error::Result;
use crate::whois::{WhoisClient, WhoisRecord};

#[async_trait]
impl RegistryLookup for WhoisClient {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        WhoisClient::lookup(self, domain).await
    }
}

/// DNS resolver collaborator backed by hickory.
pub struct DnsResolver {
    resolver: TokioResolver,
}

impl DnsResolver {
    pub fn new() -> Self {
        let resolver = match Resolver::builder_tokio() {
            Ok(builder) => builder.build(),
            Err(e) => {
                tracing::warn!("Failed to read system resolver config: {}. Using defaults.", e);
                Resolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .build()
            }
        };
        Self { resolver }
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameResolver for DnsResolver {
    async fn resolves(&self, domain: &str) -> bool {
        match self.resolver.lookup_ip(domain).await {
            Ok(lookup) => lookup.iter().next().is_some(),
            Err(e) => {
                tracing::debug!(domain = %domain, error = %e, "name resolution failed");
                false
            }
        }
    }
}

/// HTTP HEAD prober backed by reqwest. Redirects are followed; only the
/// final status code matters.
pub struct HeadProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl HeadProber {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl HttpProber for HeadProber {
    async fn head_status(&self, url: &str) -> Option<u16> {
        match self.client.head(url).timeout(self.timeout).send().await {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "HEAD probe failed");
                None
            }
        }
    }
}
