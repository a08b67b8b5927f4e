//! Process entry: config → tracing → wiring → command.

use std::process::ExitCode;
use std::sync::Arc;

use influss_app::app_paths::AppPaths;
use influss_core::ports::AppDirsPort;
use influss_infra::{DirsAppDirsAdapter, PROFILE_ENV};
use tracing::{debug, info};

use super::config::{load_config_if_present, resolve_config_path, ResolvedConfig, CONFIG_ENV};
use super::runtime::AppRuntime;
use super::tracing::init_tracing_subscriber;
use super::wiring::{wire_dependencies, WiringError};
use crate::cli::{Cli, Command};
use crate::commands;

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let app_dirs = DirsAppDirsAdapter::for_profile(std::env::var(PROFILE_ENV).ok())
        .get_app_dirs()
        .map_err(|e| WiringError::AppDirs(e.to_string()))?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    let config_path = resolve_config_path(cli.config, std::env::var_os(CONFIG_ENV), &paths);
    let app_config = load_config_if_present(&config_path)?;
    let config = ResolvedConfig::resolve(&app_config, &app_dirs, config_path);

    let logs_dir = config.file_logging.then_some(config.logs_dir.as_path());
    init_tracing_subscriber(logs_dir)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.app_data_root.display(),
        "Influss starting"
    );
    debug!(?config, "Resolved configuration");

    let deps = wire_dependencies(&config)?;
    let runtime = Arc::new(AppRuntime::new(deps, config));

    match cli.command {
        Command::Clip(args) => commands::clip::run(&runtime, args).await,
        Command::Settings { action } => commands::settings::run(&runtime, action).await,
        Command::Host => commands::host::run(runtime).await,
        Command::Paths => commands::paths::run(&runtime),
    }
}
