use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;

use crate::bootstrap::AppRuntime;
use crate::host::HostSession;

/// Serve the extension on stdin/stdout until the browser closes the pipe.
pub async fn run(runtime: Arc<AppRuntime>) -> anyhow::Result<ExitCode> {
    let clips = runtime.start_clip_service();
    let session = HostSession::new(runtime, clips);

    session.run(tokio::io::stdin(), tokio::io::stdout()).await?;

    info!("Native messaging session ended");
    Ok(ExitCode::SUCCESS)
}
