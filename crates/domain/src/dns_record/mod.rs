pub mod record;
pub mod record_type;

pub use record::{LookupRecords, MxRecord};
pub use record_type::RecordType;
