use serde_json::Value;

use crate::error::ChecklistViolation;
use crate::models::EndpointResponse;
use crate::{require, require_min_len};

pub const EXPECTED_SCHEMA_VERSION: f64 = 2.0;
pub const MODEL_HEADER: &str = "x-openai-model";
const UNKNOWN_MODEL: &str = "unknown";

/// Upstream error codes that make an `ok: false` response a failure.
pub const FAILURE_ERROR_CODES: [&str; 2] = ["PROXY_ERROR", "INVALID_JSON"];

const STOOL_FEATURE_FIELDS: [&str; 3] = ["shape_desc", "color_desc", "texture_desc"];
const INTERPRETATION_MINIMUMS: [(&str, usize); 4] = [
    ("why_shape", 2),
    ("why_color", 2),
    ("why_texture", 2),
    ("how_context_affects", 3),
];
const ACTION_KEYS: [&str; 5] = ["diet", "hydration", "care", "avoid", "observe"];
const MIN_ACTIONS: usize = 3;
const MIN_RED_FLAGS: usize = 5;
const MIN_SECTIONS: usize = 4;
const MIN_SECTION_ITEMS: usize = 3;

/// Runs the whole schema-v2 checklist over one endpoint response, stopping
/// at the first violation. Returns the decoded body on success.
pub fn validate_full_response(resp: &EndpointResponse) -> Result<Value, ChecklistViolation> {
    require!(resp.status == 200, ChecklistViolation::HttpStatus(resp.status));
    let data = resp.json().map_err(|_| ChecklistViolation::InvalidJson)?;
    check_document(&data, resp.header(MODEL_HEADER))?;
    Ok(data)
}

/// Body rules of the checklist, in order. `model_header` is the value of the
/// `x-openai-model` response header, if any.
pub fn check_document(data: &Value, model_header: Option<&str>) -> Result<(), ChecklistViolation> {
    require!(
        data.get("schema_version").and_then(Value::as_f64) == Some(EXPECTED_SCHEMA_VERSION),
        ChecklistViolation::SchemaVersion
    );

    if data.get("ok").and_then(Value::as_bool) == Some(false)
        && let Some(code) = data.get("error_code").and_then(Value::as_str)
        && FAILURE_ERROR_CODES.contains(&code)
    {
        return Err(ChecklistViolation::UpstreamError(code.to_string()));
    }

    require!(
        is_known_model(model_header),
        ChecklistViolation::UnknownModel(MODEL_HEADER)
    );
    require!(
        is_known_model(data.get("model_used").and_then(Value::as_str)),
        ChecklistViolation::UnknownModel("model_used")
    );

    let features = data.get("stool_features");
    for field in STOOL_FEATURE_FIELDS {
        let present = features
            .and_then(|f| f.get(field))
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        require!(
            present,
            ChecklistViolation::EmptyField(format!("stool_features.{field}"))
        );
    }

    let interpretation = data.get("interpretation");
    for (field, min) in INTERPRETATION_MINIMUMS {
        require_min_len!(
            interpretation.and_then(|i| i.get(field)),
            format!("interpretation.{field}"),
            min
        );
    }

    let actions = data.get("actions_today");
    for key in ACTION_KEYS {
        require_min_len!(
            actions.and_then(|a| a.get(key)),
            format!("actions_today.{key}"),
            MIN_ACTIONS
        );
    }

    require_min_len!(data.get("red_flags"), "red_flags", MIN_RED_FLAGS);

    let sections = data.pointer("/ui_strings/sections");
    require_min_len!(sections, "ui_strings.sections", MIN_SECTIONS);
    for (idx, section) in sections
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
    {
        require_min_len!(
            section.get("items"),
            format!("ui_strings.sections[{idx}].items"),
            MIN_SECTION_ITEMS
        );
    }

    Ok(())
}

fn is_known_model(model: Option<&str>) -> bool {
    model.is_some_and(|m| m != UNKNOWN_MODEL)
}
