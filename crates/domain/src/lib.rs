//! dnslookup domain layer
pub mod args;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use args::{parse_query_args, program_name, QUERY_COMMAND};
pub use config::{Config, LoggingConfig, OutputConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{LookupRecords, MxRecord, RecordType};
pub use errors::{ArgsError, LookupError};
