use std::collections::BTreeMap;

use serde::Serialize;

/// Request body for `POST /analyze`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AnalysisRequest {
    pub image: String,
    pub age_months: u32,
    pub odor: String,
    pub pain_or_strain: bool,
    pub diet_keywords: String,
    #[serde(flatten)]
    pub context: Context,
    #[serde(rename = "user_confirmed_stool", skip_serializing_if = "Option::is_none")]
    pub user_confirmed: Option<bool>,
}

/// The two context shapes the endpoint accepts. The variant decides the key
/// the object is sent under.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum Context {
    #[serde(rename = "context")]
    Flat(BTreeMap<String, String>),
    #[serde(rename = "context_input")]
    Structured(StructuredContext),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StructuredContext {
    pub recent_foods: Vec<String>,
    pub recent_drinks: Vec<String>,
    pub mood_energy: String,
    pub appetite: String,
    pub sleep: String,
    pub fever: bool,
    pub vomit: bool,
    pub belly_pain: bool,
    pub stool_times_24h: u32,
    pub cold_exposure: bool,
    // serialized as null when absent
    pub recent_antibiotics: Option<String>,
    pub other_notes: String,
}

const DEMO_AGE_MONTHS: u32 = 30;
const DEMO_ODOR: &str = "none";
const DEMO_DIET_KEYWORDS: &str = "banana";

impl AnalysisRequest {
    fn demo(image_b64: String, context: Context, user_confirmed: Option<bool>) -> Self {
        Self {
            image: image_b64,
            age_months: DEMO_AGE_MONTHS,
            odor: DEMO_ODOR.to_string(),
            pain_or_strain: false,
            diet_keywords: DEMO_DIET_KEYWORDS.to_string(),
            context,
            user_confirmed,
        }
    }

    /// Payload used by the presence-classification flow.
    pub fn detection(image_b64: String, user_confirmed: bool) -> Self {
        let context = [
            ("foods_eaten", "米饭,香蕉"),
            ("drinks_taken", "温水"),
            ("mood_state", "精神好"),
            ("other_notes", "无"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self::demo(image_b64, Context::Flat(context), Some(user_confirmed))
    }

    /// Payload used by the schema-v2 content flow.
    pub fn full_flow(image_b64: String) -> Self {
        let context = StructuredContext {
            recent_foods: vec!["banana".into(), "vegetables".into()],
            recent_drinks: vec!["milk".into()],
            mood_energy: "good".into(),
            appetite: "ok".into(),
            sleep: "good".into(),
            fever: false,
            vomit: false,
            belly_pain: false,
            stool_times_24h: 1,
            cold_exposure: true,
            recent_antibiotics: None,
            other_notes: "晨起这一泡".into(),
        };
        Self::demo(image_b64, Context::Structured(context), None)
    }
}
