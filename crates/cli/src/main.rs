//! # dnslookup
//!
//! `dnslookup --query <A|AAAA|MX|CNAME> <domain-name>`
//!
//! Looks up one record type through the system resolver and prints a report.

mod bootstrap;
mod di;
mod exit_status;
mod output;

use output::ReportFormatter;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = bootstrap::load_config();
    bootstrap::init_logging(&config);

    let args = bootstrap::collect_args(std::env::args_os());

    let report = di::build_query_command().execute(&args[..]).await;
    let rendered = ReportFormatter::new(&config.output).render(&report)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    let status = exit_status::exit_code(&report);
    debug!(status, "Exiting");

    Ok(ExitCode::from(status))
}
