use std::path::Path;
use std::process::ExitCode;

use crate::bootstrap::AppRuntime;

pub fn run(runtime: &AppRuntime) -> anyhow::Result<ExitCode> {
    let config = &runtime.config;

    println!("data dir:  {}", config.app_data_root.display());
    println!("config:    {}{}", config.config_path.display(), missing(&config.config_path));
    println!("settings:  {}{}", config.settings_path.display(), missing(&config.settings_path));
    if config.file_logging {
        println!("logs:      {}", config.logs_dir.display());
    } else {
        println!("logs:      (file logging disabled)");
    }

    Ok(ExitCode::SUCCESS)
}

fn missing(path: &Path) -> &'static str {
    if path.exists() {
        ""
    } else {
        " (not created yet)"
    }
}
