use std::net::IpAddr;

/// Mail exchange entry as returned by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Exchange host name
    pub host: String,
    /// Preference (lower is preferred)
    pub preference: u16,
}

impl MxRecord {
    pub fn new(host: impl Into<String>, preference: u16) -> Self {
        Self {
            host: host.into(),
            preference,
        }
    }
}

/// Records returned by a single successful lookup.
///
/// Order is whatever the resolver returned; nothing is re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRecords {
    /// A/AAAA lookups, both address families mixed in one list
    Addresses(Vec<IpAddr>),
    MailExchangers(Vec<MxRecord>),
    CanonicalName(String),
}

impl LookupRecords {
    pub fn is_empty(&self) -> bool {
        match self {
            LookupRecords::Addresses(ips) => ips.is_empty(),
            LookupRecords::MailExchangers(mx) => mx.is_empty(),
            LookupRecords::CanonicalName(name) => name.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LookupRecords::Addresses(ips) => ips.len(),
            LookupRecords::MailExchangers(mx) => mx.len(),
            LookupRecords::CanonicalName(name) => usize::from(!name.is_empty()),
        }
    }
}
