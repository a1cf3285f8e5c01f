use std::fmt;
use std::str::FromStr;

use crate::errors::ArgsError;

/// Record types this tool can look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    CNAME,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::CNAME => "CNAME",
        }
    }

    /// All supported record types, in the order they are listed in usage text
    pub fn all() -> [RecordType; 4] {
        [
            RecordType::A,
            RecordType::AAAA,
            RecordType::MX,
            RecordType::CNAME,
        ]
    }

    /// Comma separated list used by usage and error output
    pub fn supported_list() -> String {
        Self::all()
            .iter()
            .map(RecordType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// A and AAAA share the same address lookup
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "MX" => Ok(RecordType::MX),
            "CNAME" => Ok(RecordType::CNAME),
            _ => Err(ArgsError::UnsupportedRecordType(s.to_string())),
        }
    }
}
