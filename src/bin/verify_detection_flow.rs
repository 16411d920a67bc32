use std::process::ExitCode;

use stool_verify::config::{DetectionArgs, parse_args};
use stool_verify::{Flow, VerifyError, init_tracing, report_outcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_args::<DetectionArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    init_tracing();

    let outcome = async {
        let client = args
            .endpoint
            .client(Flow::Detection, None)
            .map_err(VerifyError::Client)?;
        client
            .run_detection_cases(&args.cases(), |line| println!("{line}"))
            .await
    }
    .await;

    report_outcome(outcome)
}
