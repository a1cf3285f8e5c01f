use async_trait::async_trait;
use dnslookup_domain::{LookupError, MxRecord};
use std::net::IpAddr;

/// Resolver interface used by the lookup use cases.
///
/// Each method performs exactly one query through the backing resolver.
/// Implementations map "name does not exist" to [`LookupError::NotFound`]
/// and "name exists but has no such records" to either an empty result or
/// [`LookupError::NoData`].
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Addresses of both families for `domain`, in resolver order.
    async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, LookupError>;

    /// Mail exchangers for `domain`, in resolver order (not sorted by preference).
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError>;

    /// Canonical name of `domain` after following any aliases. A name that
    /// is not an alias is its own canonical name.
    async fn lookup_cname(&self, domain: &str) -> Result<String, LookupError>;
}
