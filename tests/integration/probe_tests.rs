//! End-to-end probe tests
//!
//! Each test runs the complete request/decode/aggregate pipeline against
//! a mocked appliance and asserts on the final report.

#[cfg(test)]
mod tests {
    use crate::common::{ALERT_PATH, config_for, mock_appliance};
    use freenas_alert_check::client::ClientConfig;
    use freenas_alert_check::report::CheckStatus;
    use freenas_alert_check::run_check;
    use tokio::net::TcpListener;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ==================== Aggregation over HTTP ====================

    #[tokio::test]
    async fn test_critical_alert_reports_critical() {
        let server = mock_appliance(r#"[{"level":"CRIT","message":"disk full"}]"#).await;
        let report = run_check(&config_for(&server)).await;

        assert_eq!(report.status, CheckStatus::Critical);
        assert_eq!(report.message, "\"disk full\"");
        assert_eq!(report.status.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_warn_and_ok_alerts_report_warning() {
        let body = r#"[{"level":"WARN","message":"temp high"},{"level":"OK","message":"fan ok"}]"#;
        let server = mock_appliance(body).await;
        let report = run_check(&config_for(&server)).await;

        assert_eq!(report.status, CheckStatus::Warning);
        assert_eq!(report.message, "\"temp high\"\"fan ok\"");
        assert_eq!(report.status.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_empty_alert_list_reports_ok() {
        let server = mock_appliance("[]").await;
        let report = run_check(&config_for(&server)).await;

        assert_eq!(report.status, CheckStatus::Ok);
        assert!(report.message.is_empty());
        assert_eq!(report.plugin_line(), "CheckFreenasAlerts OK");
    }

    #[tokio::test]
    async fn test_yaml_alert_list_is_accepted() {
        let body = "- level: WARN\n  message: temp high\n";
        let server = mock_appliance(body).await;
        let report = run_check(&config_for(&server)).await;

        assert_eq!(report.status, CheckStatus::Warning);
        assert_eq!(report.message, "\"temp high\"");
    }

    #[tokio::test]
    async fn test_invalid_json_record_reports_fixed_message() {
        // A mapping with a sequence key survives the YAML parse but has
        // no JSON representation.
        let server = mock_appliance("- ? [a, b]\n  : boom\n").await;
        let report = run_check(&config_for(&server)).await;

        assert_eq!(report.status, CheckStatus::Critical);
        assert_eq!(report.message, "Response contains invalid JSON");
    }

    // ==================== Authentication ====================

    #[tokio::test]
    async fn test_basic_auth_sent_when_password_configured() {
        let server = MockServer::start().await;
        // base64("root:secret")
        Mock::given(method("GET"))
            .and(path(ALERT_PATH))
            .and(header("Authorization", "Basic cm9vdDpzZWNyZXQ="))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.password = Some("secret".to_string());
        let report = run_check(&config).await;

        assert_eq!(report.status, CheckStatus::Ok);
    }

    #[tokio::test]
    async fn test_no_auth_header_without_password() {
        let server = mock_appliance("[]").await;
        let report = run_check(&config_for(&server)).await;
        assert_eq!(report.status, CheckStatus::Ok);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("Authorization").is_none());
    }

    // ==================== Transport failures ====================

    #[tokio::test]
    async fn test_connection_refused_reports_critical() {
        // Bind a port, then drop the listener so nothing answers it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let config = ClientConfig {
            host: address.ip().to_string(),
            port: address.port(),
            ..ClientConfig::default()
        };
        let report = run_check(&config).await;

        assert_eq!(report.status, CheckStatus::Critical);
        // The message is the transport error description, never the
        // decoder's fixed message.
        assert!(!report.message.is_empty());
        assert_ne!(report.message, "Response contains invalid JSON");
    }

    #[tokio::test]
    async fn test_http_error_status_reports_critical() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ALERT_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let report = run_check(&config_for(&server)).await;

        assert_eq!(report.status, CheckStatus::Critical);
        assert!(report.message.contains("500"));
    }
}
