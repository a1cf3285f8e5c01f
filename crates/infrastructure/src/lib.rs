//! dnslookup infrastructure: resolver adapters
pub mod dns;
