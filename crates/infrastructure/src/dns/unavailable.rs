use async_trait::async_trait;
use dnslookup_application::ports::RecordLookup;
use dnslookup_domain::{LookupError, MxRecord};
use std::net::IpAddr;

/// Stand-in used when no resolver could be built from the system
/// configuration. Every lookup fails with the construction error.
pub struct UnavailableResolver {
    reason: String,
}

impl UnavailableResolver {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, LookupError> {
        Err(LookupError::Resolver(self.reason.clone()))
    }
}

#[async_trait]
impl RecordLookup for UnavailableResolver {
    async fn lookup_ip(&self, _domain: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.fail()
    }

    async fn lookup_mx(&self, _domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.fail()
    }

    async fn lookup_cname(&self, _domain: &str) -> Result<String, LookupError> {
        self.fail()
    }
}
