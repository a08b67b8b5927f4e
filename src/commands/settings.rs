use std::process::ExitCode;

use influss_core::settings::Settings;

use crate::bootstrap::AppRuntime;
use crate::cli::SettingsCommand;

pub async fn run(runtime: &AppRuntime, action: SettingsCommand) -> anyhow::Result<ExitCode> {
    let usecases = runtime.usecases();

    match action {
        SettingsCommand::Show => {
            let settings = usecases.get_settings().execute().await?;
            print!("{}", render(&settings));
        }
        SettingsCommand::Set(args) => {
            let current = usecases.get_settings().execute().await?;
            let change = usecases
                .update_settings()
                .execute(args.merge_into(current))
                .await?;
            println!("{}", change.to_log_string());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn render(settings: &Settings) -> String {
    let endpoint = if settings.is_configured() {
        settings.endpoint.as_str()
    } else {
        "(not configured)"
    };
    format!(
        "endpoint: {}\nusername: {}\npassword: {}\n",
        endpoint,
        settings.username,
        settings.masked_password()
    )
}
