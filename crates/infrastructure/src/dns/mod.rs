pub mod error_mapping;
pub mod record_parser;
pub mod system_resolver;
pub mod unavailable;

pub use error_mapping::map_resolve_error;
pub use system_resolver::SystemResolver;
pub use unavailable::UnavailableResolver;
