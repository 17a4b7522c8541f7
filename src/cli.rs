//! Command-line options for the alert check
//!
//! Option names and defaults follow the appliance conventions: the API
//! listens on plain HTTP port 80 and ships with a `root` account.

use crate::client::ClientConfig;
use clap::Parser;
use std::time::Duration;

/// FreeNAS alert health check
#[derive(Debug, Parser)]
#[command(name = "check-freenas-alerts", version, about)]
pub struct CheckOptions {
    /// FreeNAS hostname
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// FreeNAS API port
    #[arg(long, default_value_t = 80)]
    pub port: u16,

    /// FreeNAS username
    #[arg(short = 'u', long, default_value = "root")]
    pub username: String,

    /// FreeNAS password; basic auth is only sent when this is set
    #[arg(short = 'p', long, env = "FREENAS_PASSWORD")]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl CheckOptions {
    /// Convert parsed options into a client configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
