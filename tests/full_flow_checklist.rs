use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use stool_verify::validation::validate_full_response;
use stool_verify::{ChecklistViolation, EndpointResponse};

fn passing_body() -> Value {
    json!({
        "schema_version": 2,
        "ok": true,
        "model_used": "gpt-x",
        "stool_features": {"shape_desc": "a", "color_desc": "b", "texture_desc": "c"},
        "interpretation": {
            "why_shape": ["x", "y"],
            "why_color": ["x", "y"],
            "why_texture": ["x", "y"],
            "how_context_affects": ["x", "y", "z"]
        },
        "actions_today": {
            "diet": ["1", "2", "3"],
            "hydration": ["1", "2", "3"],
            "care": ["1", "2", "3"],
            "avoid": ["1", "2", "3"],
            "observe": ["1", "2", "3"]
        },
        "red_flags": ["a", "b", "c", "d", "e"],
        "ui_strings": {"sections": [
            {"items": ["1", "2", "3"]},
            {"items": ["1", "2", "3"]},
            {"items": ["1", "2", "3"]},
            {"items": ["1", "2", "3"]}
        ]}
    })
}

fn response_with(body: &Value, model_header: Option<&str>) -> EndpointResponse {
    let mut headers = BTreeMap::new();
    if let Some(model) = model_header {
        headers.insert("X-OpenAI-Model".to_string(), model.to_string());
    }
    EndpointResponse::new(200, headers, body.to_string())
}

fn failure(body: &Value) -> ChecklistViolation {
    validate_full_response(&response_with(body, Some("gpt-x")))
        .expect_err("checklist should fail")
}

#[test]
fn synthetic_full_response_passes() {
    let body = passing_body();
    let decoded = validate_full_response(&response_with(&body, Some("gpt-x"))).unwrap();
    assert_eq!(decoded, body);
}

#[test]
fn four_red_flags_fail_naming_red_flags() {
    let mut body = passing_body();
    body["red_flags"] = json!(["a", "b", "c", "d"]);
    let err = failure(&body);
    assert_eq!(err.field(), Some("red_flags"));
    assert!(err.to_string().starts_with("red_flags < 5"));
}

#[test]
fn model_header_is_required_even_with_valid_body() {
    let body = passing_body();
    for header in [None, Some("unknown")] {
        let err = validate_full_response(&response_with(&body, header)).unwrap_err();
        assert_eq!(err, ChecklistViolation::UnknownModel("x-openai-model"));
        assert_eq!(err.to_string(), "x-openai-model is unknown");
    }
}

#[test]
fn non_200_status_fails_before_parsing() {
    let resp = EndpointResponse::new(502, BTreeMap::new(), "<html>bad gateway</html>");
    assert_eq!(
        validate_full_response(&resp),
        Err(ChecklistViolation::HttpStatus(502))
    );
    let resp = EndpointResponse::new(201, BTreeMap::new(), passing_body().to_string());
    assert_eq!(
        validate_full_response(&resp),
        Err(ChecklistViolation::HttpStatus(201))
    );
}

#[test]
fn malformed_body_fails() {
    let resp = EndpointResponse::new(200, BTreeMap::new(), "{\"schema_version\": 2,");
    assert_eq!(
        validate_full_response(&resp),
        Err(ChecklistViolation::InvalidJson)
    );
}

#[test]
fn each_rule_fails_in_isolation() {
    let cases: Vec<(&str, &str)> = vec![
        ("/schema_version", "schema_version"),
        ("/model_used", "model_used"),
        ("/stool_features/shape_desc", "stool_features.shape_desc"),
        ("/stool_features/color_desc", "stool_features.color_desc"),
        ("/stool_features/texture_desc", "stool_features.texture_desc"),
        ("/interpretation/why_shape", "interpretation.why_shape"),
        ("/interpretation/why_color", "interpretation.why_color"),
        ("/interpretation/why_texture", "interpretation.why_texture"),
        ("/interpretation/how_context_affects", "interpretation.how_context_affects"),
        ("/actions_today/diet", "actions_today.diet"),
        ("/actions_today/hydration", "actions_today.hydration"),
        ("/actions_today/care", "actions_today.care"),
        ("/actions_today/avoid", "actions_today.avoid"),
        ("/actions_today/observe", "actions_today.observe"),
        ("/red_flags", "red_flags"),
        ("/ui_strings/sections", "ui_strings.sections"),
        ("/ui_strings/sections/2/items", "ui_strings.sections[2].items"),
    ];

    for (pointer, field) in cases {
        let mut body = passing_body();
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        body.pointer_mut(parent)
            .and_then(Value::as_object_mut)
            .unwrap()
            .remove(key);
        assert_eq!(failure(&body).field(), Some(field), "pointer {pointer}");
    }
}

#[test]
fn short_lists_report_observed_count() {
    let mut body = passing_body();
    body["interpretation"]["how_context_affects"] = json!(["x", "y"]);
    assert_eq!(
        failure(&body),
        ChecklistViolation::TooFew {
            field: "interpretation.how_context_affects".into(),
            min: 3,
            found: 2,
        }
    );
}

#[test]
fn section_violation_identifies_index() {
    let mut body = passing_body();
    body["ui_strings"]["sections"]
        .as_array_mut()
        .unwrap()
        .push(json!({"items": ["only one"]}));
    assert_eq!(
        failure(&body).to_string(),
        "ui_strings.sections[4].items < 3 (got 1)"
    );
}

#[test]
fn upstream_failure_codes_are_not_swallowed() {
    for code in ["PROXY_ERROR", "INVALID_JSON"] {
        let mut body = passing_body();
        body["ok"] = json!(false);
        body["error_code"] = json!(code);
        assert_eq!(failure(&body).to_string(), format!("error_code {code}"));
    }
}

#[test]
fn checks_short_circuit_in_order() {
    let mut body = passing_body();
    body["red_flags"] = json!([]);
    body["stool_features"] = json!({});
    body["schema_version"] = json!(1);
    assert_eq!(failure(&body), ChecklistViolation::SchemaVersion);

    body["schema_version"] = json!(2);
    assert_eq!(failure(&body).field(), Some("stool_features.shape_desc"));
}

#[test]
fn validation_leaves_response_untouched() {
    let resp = response_with(&passing_body(), Some("gpt-x"));
    let before = resp.clone();
    validate_full_response(&resp).unwrap();
    assert_eq!(resp, before);
}
