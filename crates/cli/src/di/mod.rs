use dnslookup_application::ports::RecordLookup;
use dnslookup_application::use_cases::{QueryCommandUseCase, RunLookupUseCase};
use dnslookup_infrastructure::dns::{SystemResolver, UnavailableResolver};
use std::sync::Arc;
use tracing::warn;

/// Wires the system resolver into the query command.
///
/// A missing or unreadable resolver configuration is not fatal here:
/// argument errors must still be reported, so lookups fail instead.
pub fn build_query_command() -> QueryCommandUseCase {
    let resolver: Arc<dyn RecordLookup> = match SystemResolver::from_system_conf() {
        Ok(resolver) => Arc::new(resolver),
        Err(e) => {
            warn!(error = %e, "Failed to load system resolver configuration");
            Arc::new(UnavailableResolver::new(e.to_string()))
        }
    };

    QueryCommandUseCase::new(RunLookupUseCase::new(resolver))
}
