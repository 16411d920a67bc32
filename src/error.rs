use std::path::PathBuf;

use serde_json::Value;

/// Top-level failure of a verification run. Every variant is fatal and maps
/// to exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Missing image path(s): {}. Set MUSHY_IMAGE/DIAPER_IMAGE/NON_STOOL_IMAGE.", display_paths(.0))]
    MissingImages(Vec<PathBuf>),

    #[error("image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("failed to read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to configure HTTP client: {0:#}")]
    Client(#[source] anyhow::Error),

    #[error("request failed: {0:#}")]
    Request(#[source] anyhow::Error),

    #[error("{case}: HTTP {status}")]
    UnexpectedStatus { case: String, status: u16 },

    #[error("{case}: response is not valid JSON")]
    InvalidJson { case: String },

    #[error(transparent)]
    Detection(#[from] DetectionMismatch),

    #[error(transparent)]
    Checklist(#[from] ChecklistViolation),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| {
            if p.as_os_str().is_empty() {
                "\"\"".to_string()
            } else {
                p.display().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// A presence-classification answer that disagrees with the expected case.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectionMismatch {
    #[error("{case}: expected is_stool_image={expected}, got {}", observed_repr(.observed))]
    Classification {
        case: String,
        expected: bool,
        observed: Option<Value>,
    },

    #[error("{case}: stool_confidence too low ({confidence})")]
    LowConfidence { case: String, confidence: f64 },
}

fn observed_repr(observed: &Option<Value>) -> String {
    match observed {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

/// First violated rule of the schema-v2 checklist. `Display` is the reason
/// printed after `FAIL: `.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChecklistViolation {
    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("response is not valid JSON")]
    InvalidJson,

    #[error("schema_version is not 2")]
    SchemaVersion,

    #[error("error_code {0}")]
    UpstreamError(String),

    #[error("{0} is unknown")]
    UnknownModel(&'static str),

    #[error("{0} empty")]
    EmptyField(String),

    #[error("{field} < {min} (got {found})")]
    TooFew {
        field: String,
        min: usize,
        found: usize,
    },
}

impl ChecklistViolation {
    /// Dotted path of the offending field, when the rule concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ChecklistViolation::EmptyField(field) | ChecklistViolation::TooFew { field, .. } => {
                Some(field)
            }
            ChecklistViolation::UnknownModel(field) => Some(*field),
            ChecklistViolation::SchemaVersion => Some("schema_version"),
            _ => None,
        }
    }
}
