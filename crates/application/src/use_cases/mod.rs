pub mod lookup;

pub use lookup::{LookupOutcome, QueryCommandUseCase, QueryReport, RunLookupUseCase};
