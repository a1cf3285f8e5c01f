use std::path::Path;

use crate::{ArgsError, DnsQuery, RecordType};

/// The only command the CLI understands
pub const QUERY_COMMAND: &str = "--query";

const DEFAULT_PROGRAM_NAME: &str = "dnslookup";

/// Basename of `argv[0]`, used in usage text.
pub fn program_name<S: AsRef<str>>(args: &[S]) -> String {
    args.first()
        .map(AsRef::<str>::as_ref)
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Validates `<program> --query <type> <domain>`.
///
/// The domain is passed through untouched; malformed names are left for the
/// resolver to reject.
pub fn parse_query_args<S: AsRef<str>>(args: &[S]) -> Result<DnsQuery, ArgsError> {
    let [_, command, record_type, domain] = args else {
        return Err(ArgsError::ArgumentCount);
    };

    let command: &str = command.as_ref();
    if command != QUERY_COMMAND {
        return Err(ArgsError::UnknownCommand(command.to_string()));
    }

    let record_type: &str = record_type.as_ref();
    let record_type: RecordType = record_type.parse()?;
    let domain: &str = domain.as_ref();

    Ok(DnsQuery::new(domain, record_type))
}
