use std::process::ExitCode;

use influss_core::clip::ClipResult;
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::cli::ClipArgs;

pub async fn run(runtime: &AppRuntime, args: ClipArgs) -> anyhow::Result<ExitCode> {
    let trigger = args.into_trigger();
    let span = info_span!("command.clip", source = trigger.source());

    let result = runtime
        .usecases()
        .handle_trigger()
        .execute(trigger)
        .instrument(span)
        .await;

    Ok(report(result.as_ref()))
}

fn report(result: Option<&ClipResult>) -> ExitCode {
    match result {
        Some(result) => {
            println!("{}", result.message);
            if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            println!("ignored");
            ExitCode::SUCCESS
        }
    }
}
