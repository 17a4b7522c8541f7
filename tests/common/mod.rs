//! Common test utilities for freenas-alert-check
//!
//! Provides a mocked alert API endpoint and matching client
//! configurations so integration tests only state the response body and
//! the expected report.

use freenas_alert_check::client::ClientConfig;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path served by the appliance alert API
pub const ALERT_PATH: &str = "/api/v1.0/system/alert/";

/// Start a mock appliance answering the alert endpoint with `body`
pub async fn mock_appliance(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ALERT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

/// Client configuration pointing at a mock appliance
pub fn config_for(server: &MockServer) -> ClientConfig {
    let address = server.address();
    ClientConfig {
        host: address.ip().to_string(),
        port: address.port(),
        username: "root".to_string(),
        password: None,
        timeout: Duration::from_secs(2),
    }
}
