use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{ModeCommand, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `phoenician` binary.
#[derive(Parser, Debug)]
#[command(
    name = "phoenician",
    version,
    long_version = long_version(),
    about = "Find words as you type, backed by the Datamuse API",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[command(subcommand)]
    pub(crate) mode: Option<ModeCommand>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "PHOENICIAN_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'm',
        long,
        global = true,
        value_name = "NUM",
        help = "Maximum number of words per lookup, 1 to 1000 (default: 10)"
    )]
    pub(crate) max: Option<u32>,
    #[arg(
        short = 't',
        long,
        global = true,
        value_name = "TOPICS",
        help = "Comma-separated topics that bias the results (default: none)"
    )]
    pub(crate) topics: Option<String>,
    #[arg(
        long,
        value_name = "URL",
        help = "Word lookup endpoint (default: https://api.datamuse.com/words)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        long = "timeout-ms",
        value_name = "MS",
        help = "Request timeout in milliseconds (default: 10000)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: default)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long,
        value_name = "TITLE",
        help = "Set the header title (default: Phoenician)"
    )]
    pub(crate) title: Option<String>,
    #[arg(long = "log-pane", help = "Show the log pane under the search view")]
    pub(crate) log_pane: bool,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level: off, error, warn, info, debug or trace (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the effective configuration before starting"
    )]
    pub(crate) print_config: bool,
    #[arg(short = 'l', long = "list-themes", help = "List the built-in themes and exit")]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Format for printing the committed results on exit"
    )]
    pub(crate) output: OutputFormat,
}
