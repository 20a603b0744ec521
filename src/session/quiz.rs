//! The question session: one playthrough over a fetched question pool.

use rand::Rng;
use tracing::{debug, info};

use super::{Question, SessionState};
use crate::error::TriviaError;
use crate::Result;

/// What the shell shows after an answer is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Decoded text of the correct answer.
    pub correct_answer: String,
    /// Whether the submitted choice was the correct one.
    pub was_correct: bool,
}

/// Tally shown in the game-over notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

/// Tracks question order, progress and answers for a single playthrough.
///
/// Answers are shuffled once when the session is built; [`restart`]
/// keeps both the questions and their answer order.
///
/// [`restart`]: QuizSession::restart
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    state: SessionState,
}

impl QuizSession {
    /// Build a session from a fetched pool, shuffling each question once.
    ///
    /// An empty pool is fatal: returns [`TriviaError::EmptyPool`].
    pub fn new(pool: Vec<Question>) -> Result<Self> {
        Self::with_rng(pool, &mut rand::rng())
    }

    /// Like [`QuizSession::new`] with a caller-supplied RNG.
    pub fn with_rng<R: Rng + ?Sized>(pool: Vec<Question>, rng: &mut R) -> Result<Self> {
        let mut state = SessionState::Loading;

        if pool.is_empty() {
            state.transition_to(SessionState::Failed)?;
            return Err(TriviaError::EmptyPool);
        }

        let questions: Vec<Question> = pool.into_iter().map(|q| q.shuffle_with(rng)).collect();
        state.transition_to(SessionState::InProgress)?;

        info!(questions = questions.len(), "quiz session started");

        Ok(Self {
            questions,
            current_index: 0,
            state,
        })
    }

    /// All questions in play order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in the pool.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed session.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the question awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Record the 0-based `choice` on the current question and advance.
    ///
    /// Correctness is reported in the outcome, never enforced.
    pub fn submit_answer(&mut self, choice: usize) -> Result<AnswerOutcome> {
        if !self.state.can_answer() {
            return Err(TriviaError::SessionComplete);
        }

        let question = self
            .questions
            .get_mut(self.current_index)
            .ok_or(TriviaError::SessionComplete)?;

        let available = question.choice_count();
        if choice >= available {
            return Err(TriviaError::InvalidChoice {
                index: choice,
                available,
            });
        }

        question.record_answer(choice);
        let outcome = AnswerOutcome {
            correct_answer: question.display_correct_answer(),
            was_correct: question.answered_correctly(),
        };

        self.current_index += 1;
        debug!(
            index = self.current_index,
            total = self.questions.len(),
            correct = outcome.was_correct,
            "answer recorded"
        );

        if self.current_index == self.questions.len() {
            self.state.transition_to(SessionState::Complete)?;
            info!("quiz session complete");
        }

        Ok(outcome)
    }

    /// True iff every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len()
    }

    /// Rewind to the first question and clear every recorded answer.
    ///
    /// Questions and their shuffled answer order are kept.
    pub fn restart(&mut self) {
        if self.state == SessionState::Complete {
            self.state = SessionState::InProgress;
        }
        self.current_index = 0;
        for question in &mut self.questions {
            question.clear_answer();
        }
        info!("quiz session restarted");
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.questions.len(),
            answered: self
                .questions
                .iter()
                .filter(|q| q.user_answer().is_some())
                .count(),
            correct: self
                .questions
                .iter()
                .filter(|q| q.answered_correctly())
                .count(),
        }
    }
}
