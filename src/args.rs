//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the normal application with these settings
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit with failure
    ShowHelpDueToUnknownArg,
}

/// Container for the parsed command-line arguments.
#[derive(Debug)]
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments. Help and version take precedence over
    /// everything else; an unknown flag degrades to help plus a failure exit.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut idx = 0;
        while idx < args_vec.len() {
            match args_vec[idx].as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => {
                    if let Some(dir) = args_vec.get(idx + 1) {
                        config_dir = Some(dir.clone());
                        idx += 1;
                    } else {
                        // --config with no directory is an error
                        unknown_arg_found = true;
                    }
                }
                _ => unknown_arg_found = true,
            }
            idx += 1;
        }

        let action = if display_help {
            CliAction::ShowHelp
        } else if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToUnknownArg
        } else {
            CliAction::Run {
                debug_enabled,
                config_dir,
            }
        };

        ParsedArgs { action }
    }
}

/// Displays version information using logger methods.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("huesetr [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let parsed = ParsedArgs::parse(["huesetr"]);
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: false,
                config_dir: None,
            }
        );
    }

    #[test]
    fn test_parse_debug_flag() {
        for flag in ["--debug", "-d"] {
            let parsed = ParsedArgs::parse(["huesetr", flag]);
            assert_eq!(
                parsed.action,
                CliAction::Run {
                    debug_enabled: true,
                    config_dir: None,
                }
            );
        }
    }

    #[test]
    fn test_parse_config_dir() {
        let parsed = ParsedArgs::parse(["huesetr", "--config", "/tmp/huesetr-test"]);
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: false,
                config_dir: Some("/tmp/huesetr-test".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_config_without_dir_shows_help() {
        let parsed = ParsedArgs::parse(["huesetr", "--config"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToUnknownArg);
    }

    #[test]
    fn test_help_takes_precedence() {
        let parsed = ParsedArgs::parse(["huesetr", "--debug", "--help"]);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_version_flag() {
        let parsed = ParsedArgs::parse(["huesetr", "-V"]);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_unknown_flag_shows_help() {
        let parsed = ParsedArgs::parse(["huesetr", "--frobnicate"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToUnknownArg);
    }
}
