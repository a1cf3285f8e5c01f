//! Text rendering of lookup reports
//!
//! Every block is framed by a `-` rule. Rendering is pure: the caller decides
//! where the text goes.

use dnslookup_application::use_cases::{LookupOutcome, QueryReport};
use dnslookup_domain::{
    ArgsError, DnsQuery, LookupRecords, MxRecord, OutputConfig, RecordType, QUERY_COMMAND,
};
use std::fmt::{self, Write};
use std::net::IpAddr;

const USAGE_ARGS: &str = "<record-type> <domain-name>";

pub struct ReportFormatter {
    separator: String,
}

impl ReportFormatter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            separator: config.separator(),
        }
    }

    pub fn render(&self, report: &QueryReport) -> Result<String, fmt::Error> {
        let mut out = String::new();
        match report {
            QueryReport::Rejected { program, error } => self.rejected(&mut out, program, error)?,
            QueryReport::Completed { query, outcome } => {
                self.completed(&mut out, query, outcome)?
            }
        }
        Ok(out)
    }

    fn rejected(&self, out: &mut String, program: &str, error: &ArgsError) -> fmt::Result {
        let sep = &self.separator;
        let supported = RecordType::supported_list();

        match error {
            ArgsError::ArgumentCount => writeln!(
                out,
                "{sep}\nError: {error}\n\n\
                 Example Usage: {program} {QUERY_COMMAND} {USAGE_ARGS}\n\n\
                 Supported record types: {supported}\n\
                 {sep}"
            ),
            ArgsError::UnknownCommand(_) => writeln!(
                out,
                "{sep}\n{error}\n\n\
                 Please use: {QUERY_COMMAND}\n\
                 Usage: {program} {QUERY_COMMAND} {USAGE_ARGS}\n\
                 Supported record types: {supported}\n\
                 {sep}"
            ),
            ArgsError::UnsupportedRecordType(_) => writeln!(
                out,
                "{sep}\nError: {error}\n\n\
                 Supported record types are {supported}\n\
                 Usage: {program} {QUERY_COMMAND} {USAGE_ARGS}\n\
                 {sep}"
            ),
        }
    }

    fn completed(&self, out: &mut String, query: &DnsQuery, outcome: &LookupOutcome) -> fmt::Result {
        let sep = &self.separator;
        let domain = query.domain.as_ref();
        let record_type = query.record_type;

        writeln!(
            out,
            "{sep} Results for {record_type} query of {domain} {sep}"
        )?;

        match outcome {
            LookupOutcome::Found(LookupRecords::Addresses(ips)) => {
                self.addresses(out, record_type, domain, ips)
            }
            LookupOutcome::Found(LookupRecords::MailExchangers(records)) => {
                self.mail_exchangers(out, domain, records)
            }
            LookupOutcome::Found(LookupRecords::CanonicalName(target)) => {
                self.canonical_name(out, domain, target)
            }
            LookupOutcome::NoRecords => self.no_records(out, record_type, domain),
            LookupOutcome::InvalidDomain => writeln!(
                out,
                "{sep}\nError: Invalid domain name: '{domain}'\n\
                 Please check the domain name and try again.\n\
                 {sep}"
            ),
            LookupOutcome::ResolverFailure { reason } => {
                let message = resolver_failure_message(record_type, domain, reason);
                writeln!(out, "{sep}\nError: {message}\n{sep}")
            }
        }
    }

    fn addresses(
        &self,
        out: &mut String,
        record_type: RecordType,
        domain: &str,
        ips: &[IpAddr],
    ) -> fmt::Result {
        let sep = &self.separator;
        let (v4, v6): (Vec<IpAddr>, Vec<IpAddr>) = ips
            .iter()
            .map(|ip| ip.to_canonical())
            .partition(IpAddr::is_ipv4);

        writeln!(out, "{sep} {record_type} Records for {domain} {sep}")?;

        if !v4.is_empty() {
            writeln!(out, "\nIPV4 Addresses:")?;
            for ip in &v4 {
                writeln!(out, "  - IP Address: {:<20}", ip.to_string())?;
            }
        }

        if !v6.is_empty() {
            writeln!(out, "\nIPv6 Addresses:")?;
            for ip in &v6 {
                writeln!(out, "  - IPv6 Address: {:<40}", ip.to_string())?;
            }
        }

        writeln!(out, "{sep}")
    }

    fn mail_exchangers(&self, out: &mut String, domain: &str, records: &[MxRecord]) -> fmt::Result {
        let sep = &self.separator;

        writeln!(out, "{sep} MX Records for {domain} {sep}")?;
        writeln!(out, "\nMail Exchange Records:")?;
        for mx in records {
            writeln!(
                out,
                "  - Host: {:<30}  Priority: {:<5}",
                mx.host, mx.preference
            )?;
        }
        writeln!(out, "{sep}")
    }

    fn canonical_name(&self, out: &mut String, domain: &str, target: &str) -> fmt::Result {
        let sep = &self.separator;

        writeln!(
            out,
            "{sep} CNAME Record for {domain} {sep}\n\n\
             Canonical Name (CNAME):\n\
             - Target: {target}\n\
             {sep}"
        )
    }

    fn no_records(&self, out: &mut String, record_type: RecordType, domain: &str) -> fmt::Result {
        let sep = &self.separator;
        writeln!(
            out,
            "{sep}\nNo {record_type} records found for {domain}\n{sep}"
        )
    }
}

fn resolver_failure_message(record_type: RecordType, domain: &str, reason: &str) -> String {
    match record_type {
        RecordType::A | RecordType::AAAA => format!(
            "Error looking up {record_type} records for '{domain}': {reason}. \
             Please check your network connection or DNS settings."
        ),
        RecordType::MX => format!(
            "Error looking up MX records for '{domain}': {reason}. \
             Please check your network connection or DNS settings for MX records."
        ),
        RecordType::CNAME => format!(
            "Error looking up CNAME record for '{domain}': {reason}. \
             Please check your network connection or DNS settings for CNAME records."
        ),
    }
}
