use std::collections::BTreeMap;

use anyhow::Context as _;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, info};

use crate::models::{AnalysisRequest, AnalyzeClient, EndpointResponse};

/// Header carrying the optional verification token.
pub const VERIFY_TOKEN_HEADER: &str = "x-verify-token";

/// Posts one analysis request and collects status, headers and body.
///
/// Transport failures (connect, TLS, timeout, body read) are errors; any
/// HTTP status is returned to the caller as-is.
pub async fn post_analyze(
    client: &Client,
    endpoint: &str,
    headers: HeaderMap,
    request: &AnalysisRequest,
) -> anyhow::Result<EndpointResponse> {
    let response = client
        .post(endpoint)
        .headers(headers)
        .json(request)
        .send()
        .await
        .with_context(|| format!("POST {endpoint}"))?;

    let status = response.status().as_u16();
    let headers: BTreeMap<String, String> = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect();

    info!(
        endpoint = endpoint,
        status_code = status,
        model = headers.get("x-openai-model").map(String::as_str),
        "Analysis request completed"
    );

    let body = response
        .text()
        .await
        .context("failed to read response body")?;
    debug!(body_len = body.len(), "Analysis response body received");

    Ok(EndpointResponse::new(status, headers, body))
}

impl AnalyzeClient {
    pub(crate) fn request_headers(&self) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(self.flow.user_agent()));
        if self.flow.accepts_json() {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = &self.verify_token {
            let mut token_val = HeaderValue::from_str(token.expose())
                .context("VERIFY_TOKEN is not a valid header value")?;
            token_val.set_sensitive(true);
            headers.insert(VERIFY_TOKEN_HEADER, token_val);
        }
        Ok(headers)
    }

    /// Sends `request` to the configured endpoint.
    pub async fn analyze(&self, request: &AnalysisRequest) -> anyhow::Result<EndpointResponse> {
        let headers = self.request_headers()?;
        debug!(flow = %self.flow, endpoint = self.endpoint.as_str(), "Posting analysis request");
        post_analyze(&self.client, &self.endpoint, headers, request).await
    }
}
