use thiserror::Error;

/// Rejections produced while validating the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Invalid number of arguments")]
    ArgumentCount,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unsupported record type: '{0}'")]
    UnsupportedRecordType(String),
}

/// Failures reported by a resolver backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name does not exist (NXDOMAIN)
    #[error("no such host: {0}")]
    NotFound(String),

    /// The name exists but has no records of the requested type
    #[error("no records of the requested type for {0}")]
    NoData(String),

    #[error("{0}")]
    Resolver(String),
}
