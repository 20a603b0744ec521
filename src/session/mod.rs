//! Quiz session module.
//!
//! This module provides the question model, the session state machine and
//! the session that walks a question pool from first answer to game over.

mod question;
mod quiz;
mod state;

pub use question::Question;
pub use quiz::{AnswerOutcome, QuizSession, SessionSummary};
pub use state::SessionState;
