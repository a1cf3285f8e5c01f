pub mod outcome;
pub mod query_command;
pub mod run_lookup;

pub use outcome::LookupOutcome;
pub use query_command::{QueryCommandUseCase, QueryReport};
pub use run_lookup::RunLookupUseCase;
