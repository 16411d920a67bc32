use std::process::ExitCode;

use stool_verify::config::{FullFlowArgs, parse_args};
use stool_verify::{Flow, VerifyError, init_tracing, report_outcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_args::<FullFlowArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    init_tracing();

    let outcome = async {
        let client = args
            .endpoint
            .client(Flow::FullFlow, args.verify_token())
            .map_err(VerifyError::Client)?;
        client.run_full_flow(&args.image_path()).await
    }
    .await;

    report_outcome(outcome)
}
