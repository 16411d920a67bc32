use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::error::VerifyError;
use crate::models::{AnalysisRequest, AnalyzeClient, DetectionCase};
use crate::utils::{get_content_type, read_image_base64};
use crate::validation::{check_detection, summary_line, validate_full_response};

/// Fails with one combined error naming every path that does not exist.
pub fn ensure_images_exist<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
) -> Result<(), VerifyError> {
    let missing: Vec<PathBuf> = paths
        .into_iter()
        .filter(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(VerifyError::MissingImages(missing))
    }
}

impl AnalyzeClient {
    /// Runs the presence-classification cases one after another.
    ///
    /// All images are checked before the first request goes out. `report`
    /// receives the one-line summary of each case before it is asserted.
    pub async fn run_detection_cases(
        &self,
        cases: &[DetectionCase],
        mut report: impl FnMut(&str),
    ) -> Result<(), VerifyError> {
        ensure_images_exist(cases.iter().map(|c| c.path.as_path()))?;

        for case in cases {
            let case_name = case.name.to_string();
            let image = read_image_base64(&case.path).await?;
            info!(
                case = case_name.as_str(),
                content_type = get_content_type(&case.path),
                image_b64_len = image.len(),
                "Submitting detection case"
            );

            let request = AnalysisRequest::detection(image, case.name.user_confirmed());
            let response = self.analyze(&request).await.map_err(VerifyError::Request)?;
            if !response.is_success() {
                return Err(VerifyError::UnexpectedStatus {
                    case: case_name,
                    status: response.status,
                });
            }
            let data: Value = response
                .json()
                .map_err(|_| VerifyError::InvalidJson { case: case_name })?;

            report(&summary_line(case, &data));
            check_detection(case, &data)?;
        }

        Ok(())
    }

    /// Posts one image with the structured context and runs the schema-v2
    /// checklist over the answer.
    pub async fn run_full_flow(&self, image_path: &Path) -> Result<Value, VerifyError> {
        if !image_path.exists() {
            return Err(VerifyError::ImageNotFound(image_path.to_path_buf()));
        }

        let image = read_image_base64(image_path).await?;
        info!(
            file_name = %image_path.display(),
            content_type = get_content_type(image_path),
            "Submitting full-flow analysis"
        );

        let request = AnalysisRequest::full_flow(image);
        let response = self.analyze(&request).await.map_err(VerifyError::Request)?;
        Ok(validate_full_response(&response)?)
    }
}
