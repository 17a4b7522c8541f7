//! Alert record and severity types

use serde::Deserialize;

/// Severity carried by a single alert record.
///
/// The variant order gives `Ok < Warn < Crit`, so aggregation is a plain
/// max-fold over the record severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warn,
    Crit,
}

impl Severity {
    /// Parse the appliance's severity text.
    ///
    /// Only the exact strings `CRIT`, `WARN` and `OK` are recognized;
    /// anything else is ignored by the caller.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "CRIT" => Some(Severity::Crit),
            "WARN" => Some(Severity::Warn),
            "OK" => Some(Severity::Ok),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Crit => write!(f, "CRIT"),
        }
    }
}

/// One entry of the appliance's alert list.
///
/// Records carry an open-ended set of keys; only `level` and `message`
/// matter here and both are optional. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AlertRecord {
    /// The recognized severity of this record, if any
    pub fn severity(&self) -> Option<Severity> {
        self.level.as_deref().and_then(Severity::parse)
    }
}
