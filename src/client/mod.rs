//! Alert API HTTP client
//!
//! One GET against the appliance's alert endpoint per invocation. Any
//! transport failure ends the probe; there is no retry.

pub mod types;


pub use types::ClientConfig;

use crate::utils::error::{CheckError, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Path of the alert list endpoint, relative to the appliance root.
const ALERT_ENDPOINT: &str = "/api/v1.0/system/alert/";

/// HTTP client for the FreeNAS alert API
#[derive(Debug)]
pub struct AlertApiClient {
    http: Client,
    endpoint: Url,
    username: String,
    password: Option<String>,
}

impl AlertApiClient {
    /// Create a client from the given configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&format!(
            "http://{}:{}{}",
            config.host, config.port, ALERT_ENDPOINT
        ))
        .map_err(|e| CheckError::Config(format!("Invalid endpoint URL: {}", e)))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| CheckError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Fetch the raw alert list body.
    ///
    /// Basic auth is attached only when a password is configured. A
    /// non-success status is treated the same as any other transport
    /// failure; the body of an error page is never decoded.
    pub async fn fetch_alerts(&self) -> Result<String> {
        debug!("requesting {}", self.endpoint);

        let mut request = self.http.get(self.endpoint.clone());
        if let Some(password) = &self.password {
            request = request.basic_auth(&self.username, Some(password));
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;

        debug!("received {} bytes", body.len());
        Ok(body)
    }

    /// The resolved alert endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
