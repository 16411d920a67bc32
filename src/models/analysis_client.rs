use std::time::Duration;

use anyhow::Context as _;
use reqwest::Client;

use crate::models::credentials::VerifyToken;

pub const DEFAULT_ENDPOINT: &str = "https://api.tapgiga.com/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Which verification command is talking to the endpoint. Decides the
/// identifying `User-Agent` and whether `Accept: application/json` is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Detection,
    FullFlow,
}

impl Flow {
    pub fn user_agent(self) -> &'static str {
        match self {
            Flow::Detection => "verify-detection-flow/1.0",
            Flow::FullFlow => "curl/8.6.0",
        }
    }

    pub fn accepts_json(self) -> bool {
        matches!(self, Flow::FullFlow)
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flow::Detection => write!(f, "detection"),
            Flow::FullFlow => write!(f, "full_flow"),
        }
    }
}

/// A client for the stool image analysis endpoint.
///
/// One instance serves a whole run; requests are issued one at a time and
/// each is bounded by the configured timeout.
#[derive(Clone, Debug)]
pub struct AnalyzeClient {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) flow: Flow,
    pub(crate) verify_token: Option<VerifyToken>,
}

impl AnalyzeClient {
    pub fn new(
        flow: Flow,
        endpoint: impl Into<String>,
        timeout: Duration,
        verify_token: Option<VerifyToken>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            flow,
            verify_token,
        })
    }
}
