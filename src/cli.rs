use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use influss_core::settings::Settings;
use influss_core::trigger::{ClipTrigger, ContextMenuClick};

#[derive(Debug, Parser)]
#[command(name = "influss", version)]
#[command(about = "Read it later with Influss", long_about = None)]
pub struct Cli {
    /// Config file (default: $INFLUSS_CONFIG, then <data dir>/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Clip the current tab URL, or a page/link as the context menu would
    Clip(ClipArgs),
    /// Show or change the endpoint settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
    /// Serve the browser extension over native messaging (stdin/stdout)
    Host,
    /// Print the resolved file locations
    Paths,
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct ClipArgs {
    /// URL of the current tab
    #[arg(
        required_unless_present_any = ["page", "link"],
        conflicts_with_all = ["page", "link"]
    )]
    pub url: Option<String>,

    /// Page the context menu was opened on
    #[arg(long, value_name = "URL")]
    pub page: Option<String>,

    /// Link the context menu was opened on (wins over --page)
    #[arg(long, value_name = "URL")]
    pub link: Option<String>,
}

impl ClipArgs {
    pub fn into_trigger(self) -> ClipTrigger {
        match self.url {
            Some(tab_url) => ClipTrigger::ToolbarClick { tab_url },
            None => ClipTrigger::ContextMenu(ContextMenuClick::clip(self.page, self.link)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum SettingsCommand {
    /// Print the saved settings (password masked)
    Show,
    /// Change some fields; the others keep their saved values
    Set(SettingsSetArgs),
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct SettingsSetArgs {
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

impl SettingsSetArgs {
    pub fn merge_into(self, current: Settings) -> Settings {
        Settings {
            endpoint: self.endpoint.unwrap_or(current.endpoint),
            username: self.username.unwrap_or(current.username),
            password: self.password.unwrap_or(current.password),
        }
    }
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// Browsers start a native-messaging host with their own arguments
    /// (Chrome: the caller origin; Firefox: manifest path and extension id),
    /// so such a launch is mapped straight to `host`.
    pub fn from_env() -> Self {
        let args: Vec<OsString> = std::env::args_os().collect();
        if is_browser_launch(&args) {
            return Cli {
                config: None,
                command: Command::Host,
            };
        }
        Cli::parse_from(args)
    }
}

fn is_browser_launch(args: &[OsString]) -> bool {
    let Some(first) = args.get(1).and_then(|a| a.to_str()) else {
        return false;
    };
    first.starts_with("chrome-extension://")
        || (first.ends_with(".json") && args.len() >= 3)
}
