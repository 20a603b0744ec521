//! # trivia-quiz
//!
//! Terminal trivia quiz backed by the Open Trivia Database.
//!
//! A round fetches a small pool of questions, shuffles each question's
//! answers once, and walks the pool one answer at a time. The correct
//! answer is revealed after every pick; finished rounds can be replayed
//! in place with the same questions.
//!
//! ## Features
//!
//! - **Question session**: answer tracking, progression and replay
//! - **Async provider client**: one GET per round via reqwest
//! - **Two layouts**: menu-driven or straight into the quiz, same session logic
//!
//! ## Quick Start
//!
//! ```no_run
//! use trivia_quiz::{App, Config, ShellLayout, TerminalShell};
//!
//! #[tokio::main]
//! async fn main() -> trivia_quiz::Result<()> {
//!     trivia_quiz::logging::try_init().ok();
//!
//!     let app = App::from_config(&Config::default())?;
//!     let stdin = std::io::stdin();
//!     let mut shell = TerminalShell::new(stdin.lock(), std::io::stdout(), ShellLayout::Menu);
//!
//!     app.run(&mut shell).await
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod provider;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use app::{App, RoundEnd};
pub use config::Config;
pub use error::{Result, TriviaError};
pub use output::EntityDecoder;
pub use provider::{ProviderConfig, QuestionSource, TriviaClient};
pub use session::{AnswerOutcome, Question, QuizSession, SessionState, SessionSummary};
pub use shell::{MenuChoice, Shell, ShellLayout, TerminalShell};
