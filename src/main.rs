use std::process::ExitCode;

use influss_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::from_env();

    match influss_lib::run(cli).await {
        Ok(code) => code,
        Err(err) => {
            // Tracing may not be up yet (config or app dir failure).
            eprintln!("influss: {err:#}");
            ExitCode::FAILURE
        }
    }
}
