//! Check status and plugin output
//!
//! The monitoring framework reads one line from stdout and the process
//! exit code: OK=0, WARNING=1, CRITICAL=2.

use crate::utils::error::CheckError;

/// Name prefix of the plugin output line
const CHECK_NAME: &str = "CheckFreenasAlerts";

/// Tri-state check status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
}

impl CheckStatus {
    /// Conventional monitoring exit code for this status
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Critical => 2,
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Warning => write!(f, "WARNING"),
            CheckStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Final result of one probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckReport {
    /// The line printed to stdout for the monitoring framework
    pub fn plugin_line(&self) -> String {
        if self.message.is_empty() {
            format!("{} {}", CHECK_NAME, self.status)
        } else {
            format!("{} {}: {}", CHECK_NAME, self.status, self.message)
        }
    }
}

impl From<CheckError> for CheckReport {
    /// Every error ends the probe as CRITICAL with the error description
    /// as the message.
    fn from(error: CheckError) -> Self {
        Self {
            status: CheckStatus::Critical,
            message: error.to_string(),
        }
    }
}
