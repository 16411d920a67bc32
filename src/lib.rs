//! Verification commands for the stool image analysis endpoint.
//!
//! Two flows share this library:
//!
//! - `verify_detection_flow` posts three sample images and checks that the
//!   endpoint classifies each as stool / not stool as expected.
//! - `verify_v2_full_flow` posts one image with a structured context and
//!   walks the schema-v2 content checklist over the answer.
//!
//! Both run strictly sequentially and stop at the first failure.

use std::process::ExitCode;

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;

pub use error::{ChecklistViolation, DetectionMismatch, VerifyError};
pub use models::{AnalysisRequest, AnalyzeClient, DetectionCase, EndpointResponse, Flow};
pub use utils::init_tracing;

pub const PASS_MARKER: &str = "PASS";

/// Prints the final verdict on stdout and maps it to the process exit code.
pub fn report_outcome<T>(outcome: Result<T, VerifyError>) -> ExitCode {
    match outcome {
        Ok(_) => {
            println!("{PASS_MARKER}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "verification failed");
            println!("FAIL: {err}");
            ExitCode::FAILURE
        }
    }
}
