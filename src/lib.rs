//! # freenas-alert-check
//!
//! Sensu-style health check for the FreeNAS alert API.
//!
//! One probe per invocation: a single GET against
//! `/api/v1.0/system/alert/`, a YAML-superset decode of the returned alert
//! list, and a worst-case fold of the record severities into one
//! OK / WARNING / CRITICAL report for the monitoring framework.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use freenas_alert_check::client::ClientConfig;
//! use freenas_alert_check::run_check;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = ClientConfig::new("nas.example.org", 80);
//!     let report = run_check(&config).await;
//!     println!("{}", report.plugin_line());
//!     std::process::exit(report.status.exit_code() as i32);
//! }
//! ```

#![warn(clippy::all)]

pub mod alerts;
pub mod cli;
pub mod client;
pub mod report;
pub mod utils;

// Re-export main types
pub use alerts::{AlertRecord, Severity, aggregate};
pub use client::{AlertApiClient, ClientConfig};
pub use report::{CheckReport, CheckStatus};
pub use utils::error::{CheckError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run one complete probe: fetch the alert list and aggregate it.
///
/// Every failure mode collapses into a CRITICAL report, so callers only
/// ever see a [`CheckReport`].
pub async fn run_check(config: &ClientConfig) -> CheckReport {
    let outcome = async {
        let client = AlertApiClient::new(config)?;
        let body = client.fetch_alerts().await?;
        aggregate(&body)
    }
    .await;

    match outcome {
        Ok(report) => report,
        Err(e) => CheckReport::from(e),
    }
}
