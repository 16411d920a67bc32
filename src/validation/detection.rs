use serde_json::Value;

use crate::error::DetectionMismatch;
use crate::models::DetectionCase;

/// Lowest confidence accepted for a positive case.
pub const MIN_STOOL_CONFIDENCE: f64 = 0.25;

/// Checks a presence-classification answer against its case.
///
/// `is_stool_image` must be exactly the expected boolean; a missing or
/// non-boolean value is a mismatch. For positive cases a numeric
/// `stool_confidence` below [`MIN_STOOL_CONFIDENCE`] also fails, while a
/// missing or non-numeric confidence is accepted.
pub fn check_detection(case: &DetectionCase, resp: &Value) -> Result<(), DetectionMismatch> {
    let observed = resp.get("is_stool_image");
    if observed.and_then(Value::as_bool) != Some(case.expect_stool) {
        return Err(DetectionMismatch::Classification {
            case: case.name.to_string(),
            expected: case.expect_stool,
            observed: observed.cloned(),
        });
    }

    if case.expect_stool
        && let Some(confidence) = resp.get("stool_confidence").and_then(Value::as_f64)
        && confidence < MIN_STOOL_CONFIDENCE
    {
        return Err(DetectionMismatch::LowConfidence {
            case: case.name.to_string(),
            confidence,
        });
    }

    Ok(())
}

/// One-line progress report printed before a case is asserted.
pub fn summary_line(case: &DetectionCase, resp: &Value) -> String {
    let field = |key: &str| match resp.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => "null".to_string(),
    };
    format!(
        "[{}] is_stool_image={} stool_confidence={} scene={} form={}",
        case.name,
        field("is_stool_image"),
        field("stool_confidence"),
        field("stool_scene"),
        field("stool_form_hint"),
    )
}
