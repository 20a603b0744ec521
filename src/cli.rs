//! Command-line interface for trivia-quiz.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::shell::ShellLayout;

/// Command-line arguments.
///
/// Everything except the flags is optional so that unset options fall
/// through to the environment, config file and defaults.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Number of questions per round.
    pub amount: Option<u32>,
    /// Open Trivia Database category id.
    pub category: Option<u32>,
    /// Provider endpoint.
    pub api_url: Option<String>,
    /// Shell layout.
    pub layout: Option<ShellLayout>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('n') | Long("amount") => {
                let value: String = parser.value()?.parse()?;
                let amount: u32 = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidValue("amount", value.clone()))?;
                if amount == 0 {
                    return Err(ArgsError::InvalidValue("amount", value));
                }
                result.amount = Some(amount);
            }
            Short('C') | Long("category") => {
                let value: String = parser.value()?.parse()?;
                result.category = Some(
                    value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue("category", value))?,
                );
            }
            Short('u') | Long("api-url") => {
                result.api_url = Some(parser.value()?.parse()?);
            }
            Short('L') | Long("layout") => {
                let value: String = parser.value()?.parse()?;
                result.layout = Some(
                    value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue("layout", value))?,
                );
            }
            Short('t') | Long("timeout") => {
                let value: String = parser.value()?.parse()?;
                result.timeout_secs = Some(
                    value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue("timeout", value))?,
                );
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"trivia-quiz {version}
Terminal trivia quiz backed by the Open Trivia Database

USAGE:
    trivia-quiz [OPTIONS]

OPTIONS:
    -n, --amount <N>        Questions per round [default: 4]
    -C, --category <ID>     Open Trivia Database category [default: 18]
    -u, --api-url <URL>     Provider endpoint [default: https://opentdb.com/api.php]
    -L, --layout <LAYOUT>   menu or embedded [default: menu]
    -t, --timeout <SECS>    HTTP request timeout [default: client default]
    -c, --config <FILE>     Path to configuration file (JSON)
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    TRIVIA_API_URL          Provider endpoint (overrides config)
    TRIVIA_AMOUNT           Questions per round (overrides config)
    TRIVIA_CATEGORY         Category id (overrides config)
    TRIVIA_LAYOUT           Shell layout (overrides config)
    TRIVIA_LOG_LEVEL        Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXAMPLES:
    # Four computer-science questions with the menu
    trivia-quiz

    # Ten general-knowledge questions, straight into the quiz
    trivia-quiz -n 10 -C 9 -L embedded
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("trivia-quiz {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
