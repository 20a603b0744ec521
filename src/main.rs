//! trivia-quiz binary entry point.

use std::process::ExitCode;

use tracing::{error, info};
use trivia_quiz::{cli, logging, App, Config, TerminalShell, TriviaError};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Try 'trivia-quiz --help' for more information.");
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match config.log_filter() {
        Some(level) => {
            logging::init_with_level(level).ok();
        }
        None => logging::init(),
    }
    info!("trivia-quiz v{}", env!("CARGO_PKG_VERSION"));

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to build provider client");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let mut shell = TerminalShell::new(stdin.lock(), std::io::stdout(), config.shell.layout);

    match app.run(&mut shell).await {
        Ok(()) => ExitCode::SUCCESS,
        // Already shown to the user by the shell
        Err(TriviaError::EmptyPool) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "quiz aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
