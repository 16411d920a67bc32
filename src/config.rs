use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser};

use crate::models::{
    AnalyzeClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DetectionCase, Flow,
    VerifyToken,
};
use crate::utils::expand_home;

/// Parses `args` without letting clap exit the process.
///
/// `--help` and `--version` print and map to exit 0; every other parse
/// error is printed and maps to exit 1.
pub fn parse_args_from<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

pub fn parse_args<P: Parser>() -> Result<P, ExitCode> {
    parse_args_from(std::env::args_os())
}

#[derive(Debug, Clone, Args)]
pub struct EndpointArgs {
    /// Analysis endpoint URL.
    #[arg(long, env = "ANALYZE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl EndpointArgs {
    pub fn client(&self, flow: Flow, token: Option<VerifyToken>) -> anyhow::Result<AnalyzeClient> {
        AnalyzeClient::new(
            flow,
            self.endpoint.clone(),
            Duration::from_secs(self.timeout_secs),
            token,
        )
    }
}

/// Checks that the endpoint classifies the three sample images correctly.
#[derive(Debug, Clone, Parser)]
#[command(name = "verify_detection_flow", version)]
pub struct DetectionArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    #[arg(long, env = "MUSHY_IMAGE", default_value = "~/Desktop/mushy.jpg")]
    pub mushy_image: String,

    #[arg(long, env = "DIAPER_IMAGE", default_value = "~/Desktop/diaper.jpg")]
    pub diaper_image: String,

    #[arg(long, env = "NON_STOOL_IMAGE", default_value = "~/Desktop/non_stool.jpg")]
    pub non_stool_image: String,
}

impl DetectionArgs {
    pub fn cases(&self) -> Vec<DetectionCase> {
        DetectionCase::standard(
            expand_home(&self.mushy_image),
            expand_home(&self.diaper_image),
            expand_home(&self.non_stool_image),
        )
    }
}

/// Posts one image and checks the full schema-v2 response.
#[derive(Debug, Clone, Parser)]
#[command(name = "verify_v2_full_flow", version)]
pub struct FullFlowArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Image to analyze.
    #[arg(default_value = "~/Desktop/test.jpg")]
    pub image: String,

    /// Sent as X-Verify-Token when non-empty.
    #[arg(long, env = "VERIFY_TOKEN", hide_env_values = true)]
    pub verify_token: Option<String>,
}

impl FullFlowArgs {
    pub fn image_path(&self) -> PathBuf {
        expand_home(&self.image)
    }

    pub fn verify_token(&self) -> Option<VerifyToken> {
        VerifyToken::from_raw(self.verify_token.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_args_take_explicit_paths() {
        let args = DetectionArgs::try_parse_from([
            "verify_detection_flow",
            "--mushy-image",
            "/a/mushy.jpg",
            "--diaper-image",
            "/a/diaper.jpg",
            "--non-stool-image",
            "/a/other.jpg",
            "--endpoint",
            "http://localhost:8787/analyze",
        ])
        .unwrap();
        let cases = args.cases();
        assert_eq!(cases[2].path, PathBuf::from("/a/other.jpg"));
        assert_eq!(cases[1].path, PathBuf::from("/a/diaper.jpg"));
        assert_eq!(args.endpoint.endpoint, "http://localhost:8787/analyze");
        assert_eq!(args.endpoint.timeout_secs, 60);
    }

    #[test]
    fn bad_arguments_exit_with_failure() {
        let extra = parse_args_from::<FullFlowArgs, _, _>([
            "verify_v2_full_flow",
            "/tmp/x.png",
            "extra",
        ]);
        assert_eq!(extra.unwrap_err(), ExitCode::FAILURE);

        let timeout = parse_args_from::<DetectionArgs, _, _>([
            "verify_detection_flow",
            "--timeout-secs",
            "abc",
        ]);
        assert_eq!(timeout.unwrap_err(), ExitCode::FAILURE);
    }

    #[test]
    fn help_and_version_exit_cleanly() {
        for flag in ["--help", "--version"] {
            let outcome = parse_args_from::<FullFlowArgs, _, _>(["verify_v2_full_flow", flag]);
            assert_eq!(outcome.unwrap_err(), ExitCode::SUCCESS);
        }
    }

    #[test]
    fn full_flow_accepts_positional_image() {
        let args = FullFlowArgs::try_parse_from([
            "verify_v2_full_flow",
            "/tmp/x.png",
            "--verify-token",
            "  ",
        ])
        .unwrap();
        assert_eq!(args.image_path(), PathBuf::from("/tmp/x.png"));
        assert!(args.verify_token().is_none());
    }
}
