use dnslookup_domain::LookupError;
use hickory_resolver::ResolveError;

/// Maps a hickory failure onto the port's error type.
///
/// NXDOMAIN becomes `NotFound`; an empty NOERROR answer becomes `NoData`;
/// everything else (timeouts, SERVFAIL, I/O) is passed through as text.
pub fn map_resolve_error(domain: &str, error: &ResolveError) -> LookupError {
    classify(
        domain,
        error.is_nx_domain(),
        error.is_no_records_found(),
        error.to_string(),
    )
}

fn classify(domain: &str, nx_domain: bool, no_records: bool, message: String) -> LookupError {
    if nx_domain {
        LookupError::NotFound(domain.to_string())
    } else if no_records {
        LookupError::NoData(domain.to_string())
    } else {
        LookupError::Resolver(message)
    }
}
