//! Read-only checks over decoded endpoint responses.
//!
//! Nothing here mutates the response; every rule is a predicate over
//! `&Value` and reports the first violation it finds.

pub mod detection;
pub mod full_flow;

use serde_json::Value;

pub use detection::{MIN_STOOL_CONFIDENCE, check_detection, summary_line};
pub use full_flow::{FAILURE_ERROR_CODES, MODEL_HEADER, check_document, validate_full_response};

/// Number of entries in an array value. Missing, null and non-array values
/// count as zero.
pub fn entry_count(value: Option<&Value>) -> usize {
    value.and_then(Value::as_array).map_or(0, Vec::len)
}
