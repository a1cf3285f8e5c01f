use dnslookup_domain::{LookupError, LookupRecords, RecordType};

/// Classified result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// At least one record came back
    Found(LookupRecords),
    /// The lookup succeeded but returned nothing usable
    NoRecords,
    /// The resolver reported that the name does not exist
    InvalidDomain,
    /// Any other resolver failure
    ResolverFailure { reason: String },
}

impl LookupOutcome {
    pub fn from_records(records: LookupRecords) -> Self {
        if records.is_empty() {
            LookupOutcome::NoRecords
        } else {
            LookupOutcome::Found(records)
        }
    }

    /// CNAME lookups report a missing name as "no records", unlike the
    /// address and MX lookups which report it as an invalid domain.
    pub fn from_error(record_type: RecordType, error: LookupError) -> Self {
        match (record_type, error) {
            (RecordType::CNAME, LookupError::NotFound(_)) => LookupOutcome::NoRecords,
            (_, LookupError::NotFound(_)) => LookupOutcome::InvalidDomain,
            (_, LookupError::NoData(_)) => LookupOutcome::NoRecords,
            (_, LookupError::Resolver(reason)) => LookupOutcome::ResolverFailure { reason },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Found(_) | LookupOutcome::NoRecords)
    }
}
