use dnslookup_application::use_cases::{LookupOutcome, QueryReport};

/// Lookup ran; records or "no records" were printed
pub const SUCCESS: u8 = 0;
/// Invalid domain or resolver failure
pub const LOOKUP_FAILED: u8 = 1;
/// Arguments were rejected
pub const USAGE: u8 = 2;

pub fn exit_code(report: &QueryReport) -> u8 {
    match report {
        QueryReport::Rejected { .. } => USAGE,
        QueryReport::Completed { outcome, .. } => match outcome {
            LookupOutcome::Found(_) | LookupOutcome::NoRecords => SUCCESS,
            LookupOutcome::InvalidDomain | LookupOutcome::ResolverFailure { .. } => LOOKUP_FAILED,
        },
    }
}
