//! check-freenas-alerts - FreeNAS alert health probe
//!
//! Queries the appliance alert API once and reports the aggregated
//! severity to the monitoring framework via stdout and the exit code.

use clap::Parser;
use freenas_alert_check::cli::CheckOptions;
use freenas_alert_check::run_check;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the plugin output line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = CheckOptions::parse();
    let report = run_check(&options.client_config()).await;

    println!("{}", report.plugin_line());
    ExitCode::from(report.status.exit_code())
}
