//! Alert decoding and severity aggregation
//!
//! The appliance returns its alert list as JSON; the body is decoded with
//! a YAML parser, which accepts JSON as a subset, and every element is
//! re-validated as JSON before it is interpreted. All records then fold
//! into a single worst-case severity plus a concatenated message.

pub mod aggregate;
pub mod types;


pub use aggregate::aggregate;
pub use types::{AlertRecord, Severity};
