//! Binary entry point: CLI dispatch only.
//!
//! All application logic lives in the library; this file parses the command
//! line, records the custom config directory if one was given, and hands off
//! to the [`Huesetr`] coordinator.

use huesetr::args::{CliAction, ParsedArgs, display_help, display_version_info};
use huesetr::constants::EXIT_FAILURE;
use huesetr::{Huesetr, config, log_end, log_error_exit};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    match parsed.action {
        CliAction::ShowHelp => display_help(),
        CliAction::ShowVersion => display_version_info(),
        CliAction::ShowHelpDueToUnknownArg => {
            display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run {
            debug_enabled,
            config_dir,
        } => {
            if let Err(e) = run(debug_enabled, config_dir) {
                log_error_exit!("huesetr exited with an error");
                eprintln!("{:?}", e);
                log_end!();
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}

fn run(debug_enabled: bool, config_dir: Option<String>) -> anyhow::Result<()> {
    config::set_config_dir(config_dir)?;
    Huesetr::new(debug_enabled).run()
}
