use dnslookup_domain::{parse_query_args, program_name, ArgsError, DnsQuery};
use tracing::debug;

use super::{LookupOutcome, RunLookupUseCase};

/// Everything the CLI needs to print for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryReport {
    /// Arguments were rejected; no lookup was attempted
    Rejected { program: String, error: ArgsError },
    Completed {
        query: DnsQuery,
        outcome: LookupOutcome,
    },
}

impl QueryReport {
    pub fn is_success(&self) -> bool {
        match self {
            QueryReport::Rejected { .. } => false,
            QueryReport::Completed { outcome, .. } => outcome.is_success(),
        }
    }
}

/// Validates the raw argument list and, if it is well formed, runs the lookup.
pub struct QueryCommandUseCase {
    lookup: RunLookupUseCase,
}

impl QueryCommandUseCase {
    pub fn new(lookup: RunLookupUseCase) -> Self {
        Self { lookup }
    }

    pub async fn execute<S: AsRef<str>>(&self, args: &[S]) -> QueryReport {
        let query = match parse_query_args(args) {
            Ok(query) => query,
            Err(error) => {
                debug!(error = %error, "Rejected arguments");
                return QueryReport::Rejected {
                    program: program_name(args),
                    error,
                };
            }
        };

        debug!(query = %query, "Arguments accepted");
        let outcome = self.lookup.execute(&query).await;
        QueryReport::Completed { query, outcome }
    }
}
