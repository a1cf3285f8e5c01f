//! dnslookup application layer: resolver port and lookup use cases
pub mod ports;
pub mod use_cases;
