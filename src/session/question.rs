//! A single trivia question and its answer bookkeeping.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::output::EntityDecoder;

/// One question as delivered by the trivia provider.
///
/// Text fields keep the provider's HTML-entity encoding; the `display_*`
/// accessors return decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text.
    #[serde(rename = "question")]
    pub text: String,
    /// The correct answer.
    pub correct_answer: String,
    /// The wrong answers, in provider order.
    pub incorrect_answers: Vec<String>,
    /// Provider category label, e.g. "Science: Computers".
    #[serde(default)]
    pub category: String,
    /// "easy", "medium" or "hard".
    #[serde(default)]
    pub difficulty: String,
    /// "multiple" or "boolean".
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Permutation of incorrect answers plus the correct one.
    #[serde(skip)]
    shuffled_answers: Vec<String>,
    /// 1-based index into `shuffled_answers` picked by the user.
    #[serde(skip)]
    user_answer: Option<usize>,
}

impl Question {
    /// Create a question with no metadata.
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
            category: String::new(),
            difficulty: String::new(),
            kind: String::new(),
            shuffled_answers: Vec::new(),
            user_answer: None,
        }
    }

    /// Shuffle answers with the thread-local RNG.
    pub fn shuffle(self) -> Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Combine incorrect and correct answers and apply a uniform random
    /// permutation, replacing any previous order.
    pub fn shuffle_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        let mut answers = self.incorrect_answers.clone();
        answers.push(self.correct_answer.clone());
        answers.shuffle(rng);
        self.shuffled_answers = answers;
        self
    }

    /// Answers in display order (still entity-encoded).
    pub fn shuffled_answers(&self) -> &[String] {
        &self.shuffled_answers
    }

    /// Number of selectable answers.
    pub fn choice_count(&self) -> usize {
        self.shuffled_answers.len()
    }

    /// The recorded 1-based answer, if any.
    pub fn user_answer(&self) -> Option<usize> {
        self.user_answer
    }

    /// Record the user's 0-based choice. Overwrites an earlier answer.
    pub(crate) fn record_answer(&mut self, choice: usize) {
        self.user_answer = Some(choice + 1);
    }

    pub(crate) fn clear_answer(&mut self) {
        self.user_answer = None;
    }

    /// Whether the recorded answer is the correct one.
    pub fn answered_correctly(&self) -> bool {
        self.user_answer
            .and_then(|n| self.shuffled_answers.get(n - 1))
            .is_some_and(|answer| *answer == self.correct_answer)
    }

    /// Decoded question text.
    pub fn display_text(&self) -> String {
        EntityDecoder::decode(&self.text)
    }

    /// Decoded correct answer.
    pub fn display_correct_answer(&self) -> String {
        EntityDecoder::decode(&self.correct_answer)
    }

    /// Decoded answers in display order.
    pub fn display_answers(&self) -> Vec<String> {
        self.shuffled_answers
            .iter()
            .map(|a| EntityDecoder::decode(a))
            .collect()
    }
}
