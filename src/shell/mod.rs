//! Presentation layer.
//!
//! The [`Shell`] trait is everything the app needs from a front end. Both
//! layouts drive the same [`QuizSession`](crate::session::QuizSession);
//! only the presentation differs.

mod terminal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::session::{AnswerOutcome, Question, SessionSummary};
use crate::Result;

pub use terminal::TerminalShell;

/// Which front-end variant to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellLayout {
    /// Side menu with Quiz / About / Exit before the quiz.
    #[default]
    Menu,
    /// Straight into the quiz, no menu.
    Embedded,
}

impl FromStr for ShellLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "menu" => Ok(Self::Menu),
            "embedded" => Ok(Self::Embedded),
            other => Err(format!("unknown layout '{other}' (expected menu or embedded)")),
        }
    }
}

impl fmt::Display for ShellLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => f.write_str("menu"),
            Self::Embedded => f.write_str("embedded"),
        }
    }
}

/// Entries of the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quiz,
    About,
    Exit,
}

/// Text for the About page. Describes only what the program does.
pub const ABOUT_TEXT: &str = "\
Trivia Quiz pulls a short round of questions from the Open Trivia Database
and asks them one at a time. Pick an answer by number; the correct answer
is revealed after each pick. When the round is over you can play the same
questions again.";

/// Front end driven by [`App`](crate::app::App).
pub trait Shell {
    /// Show the menu and wait for a selection.
    fn menu(&mut self) -> Result<MenuChoice>;

    fn show_about(&mut self) -> Result<()>;

    /// Render question `index` (0-based) of `total` with numbered answers.
    fn render_question(&mut self, index: usize, total: usize, question: &Question) -> Result<()>;

    /// Read a 0-based answer choice in `0..count`. `None` means the user quit.
    fn read_choice(&mut self, count: usize) -> Result<Option<usize>>;

    /// Reveal the correct answer after a submission.
    fn show_result(&mut self, outcome: &AnswerOutcome) -> Result<()>;

    /// Game-over notice.
    fn show_complete(&mut self, summary: &SessionSummary) -> Result<()>;

    /// Ask whether to play the same questions again.
    fn ask_restart(&mut self) -> Result<bool>;

    fn show_error(&mut self, message: &str) -> Result<()>;
}
