//! Worst-case fold over the decoded alert list

use super::types::{AlertRecord, Severity};
use crate::report::{CheckReport, CheckStatus};
use crate::utils::error::{CheckError, Result};
use tracing::debug;

/// Decode a response body and fold all records into one report.
///
/// CRITICAL if any record carries `CRIT`, WARNING if any carries `WARN`
/// without a `CRIT`, otherwise OK. The report message is every record
/// message wrapped in double quotes, in input order, with no separator.
pub fn aggregate(body: &str) -> Result<CheckReport> {
    let records = decode_records(body)?;
    debug!("aggregating {} alert records", records.len());

    let mut severity: Option<Severity> = None;
    let mut message = String::new();

    for record in &records {
        if let Some(level) = record.severity() {
            // Max-fold: a later OK never downgrades an earlier WARN.
            severity = Some(severity.map_or(level, |current| current.max(level)));
        }
        if let Some(text) = &record.message {
            message.push_str(&format!("\"{}\"", text));
        }
    }

    let status = match severity {
        Some(Severity::Crit) => CheckStatus::Critical,
        Some(Severity::Warn) => CheckStatus::Warning,
        Some(Severity::Ok) | None => CheckStatus::Ok,
    };

    Ok(CheckReport { status, message })
}

/// Decode the body into typed alert records.
///
/// The body is parsed as YAML (a superset of the JSON the API emits) and
/// must hold a sequence of mappings; a null document counts as an empty
/// list. Each element must survive re-encoding as JSON before it is
/// deserialized into an [`AlertRecord`].
fn decode_records(body: &str) -> Result<Vec<AlertRecord>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: serde_yaml::Value = serde_yaml::from_str(body)
        .map_err(|e| CheckError::Payload(format!("undecodable response body: {}", e)))?;

    let elements = match document {
        serde_yaml::Value::Null => Vec::new(),
        serde_yaml::Value::Sequence(elements) => elements,
        _ => {
            return Err(CheckError::Payload(
                "expected a sequence of alert records".to_string(),
            ));
        }
    };

    let mut records = Vec::with_capacity(elements.len());
    for element in elements {
        // Re-validation: YAML allows complex mapping keys (sequences,
        // mappings) that have no JSON representation.
        let json = serde_json::to_value(&element).map_err(|_| CheckError::InvalidRecord)?;
        let record: AlertRecord = serde_json::from_value(json)
            .map_err(|e| CheckError::Payload(format!("malformed alert record: {}", e)))?;
        records.push(record);
    }

    Ok(records)
}
