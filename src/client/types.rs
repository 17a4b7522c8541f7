use std::time::Duration;

/// Configuration for the alert API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration with appliance defaults for everything but the address
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the credentials used for basic auth
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = Some(password.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 80,
            username: "root".to_string(),
            password: None,
            timeout: Duration::from_secs(10),
        }
    }
}
