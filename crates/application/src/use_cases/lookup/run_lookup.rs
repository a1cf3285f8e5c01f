use dnslookup_domain::{DnsQuery, LookupRecords, RecordType};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::LookupOutcome;
use crate::ports::RecordLookup;

/// Performs exactly one resolver call for a validated query.
pub struct RunLookupUseCase {
    resolver: Arc<dyn RecordLookup>,
}

impl RunLookupUseCase {
    pub fn new(resolver: Arc<dyn RecordLookup>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self, query), fields(domain = %query.domain, record_type = %query.record_type))]
    pub async fn execute(&self, query: &DnsQuery) -> LookupOutcome {
        let domain = query.domain.as_ref();

        let result = match query.record_type {
            RecordType::A | RecordType::AAAA => self
                .resolver
                .lookup_ip(domain)
                .await
                .map(LookupRecords::Addresses),
            RecordType::MX => self
                .resolver
                .lookup_mx(domain)
                .await
                .map(LookupRecords::MailExchangers),
            RecordType::CNAME => self
                .resolver
                .lookup_cname(domain)
                .await
                .map(LookupRecords::CanonicalName),
        };

        match result {
            Ok(records) => {
                debug!(count = records.len(), "Lookup completed");
                LookupOutcome::from_records(records)
            }
            Err(e) => {
                warn!(error = %e, "Lookup failed");
                LookupOutcome::from_error(query.record_type, e)
            }
        }
    }
}
