use async_trait::async_trait;
use dnslookup_application::ports::RecordLookup;
use dnslookup_domain::{LookupError, MxRecord};
use hickory_resolver::config::LookupIpStrategy;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::{ResolveError, Resolver, TokioResolver};
use std::net::IpAddr;
use tracing::debug;

use super::map_resolve_error;
use super::record_parser::{
    canonical_name_from_addresses, canonical_name_from_aliases, mx_records,
};

/// Stub resolver configured from the operating system (`/etc/resolv.conf`
/// on Unix, the registry on Windows).
///
/// Timeouts, retries and search domains are whatever the system
/// configuration and hickory's defaults say.
pub struct SystemResolver {
    resolver: TokioResolver,
}

impl SystemResolver {
    pub fn from_system_conf() -> Result<Self, ResolveError> {
        let mut builder = Resolver::builder_tokio()?;
        // A and AAAA both go through the address lookup and show both families
        builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

        Ok(Self {
            resolver: builder.build(),
        })
    }
}

#[async_trait]
impl RecordLookup for SystemResolver {
    async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, LookupError> {
        debug!(domain = %domain, "Performing address lookup");

        let lookup = self
            .resolver
            .lookup_ip(domain)
            .await
            .map_err(|e| map_resolve_error(domain, &e))?;

        Ok(lookup.iter().collect())
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        debug!(domain = %domain, "Performing MX lookup");

        let lookup = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(|e| map_resolve_error(domain, &e))?;

        Ok(mx_records(lookup.as_lookup().records()))
    }

    /// Final canonical name after following any aliases; a name that is not
    /// an alias is its own canonical name.
    async fn lookup_cname(&self, domain: &str) -> Result<String, LookupError> {
        debug!(domain = %domain, "Performing canonical name lookup");

        match self.resolver.lookup_ip(domain).await {
            Ok(lookup) => {
                if let Some(name) = canonical_name_from_addresses(lookup.as_lookup().records()) {
                    return Ok(name);
                }
            }
            Err(e) => match map_resolve_error(domain, &e) {
                LookupError::NoData(_) => {}
                other => return Err(other),
            },
        }

        // The name exists but has no addresses, so only an explicit alias
        // can answer
        debug!(domain = %domain, "No addresses, querying CNAME directly");
        let lookup = self
            .resolver
            .lookup(domain, RecordType::CNAME)
            .await
            .map_err(|e| map_resolve_error(domain, &e))?;

        canonical_name_from_aliases(lookup.records())
            .ok_or_else(|| LookupError::NoData(domain.to_string()))
    }
}
