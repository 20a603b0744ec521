//! Trivia question providers.
//!
//! A [`QuestionSource`] supplies the pool for a new session. Failures never
//! reach the caller: a source returns an empty pool instead, which the app
//! treats as fatal for that session.

mod client;

pub use client::{ProviderConfig, TriviaClient, DEFAULT_AMOUNT, DEFAULT_API_URL, DEFAULT_CATEGORY};

use crate::session::Question;

/// Anything that can produce a question pool.
#[allow(async_fn_in_trait)]
pub trait QuestionSource {
    /// Fetch `amount` questions from `category`; empty on any failure.
    async fn fetch(&self, amount: u32, category: u32) -> Vec<Question>;
}

/// A fixed pool, handy for offline play and tests.
impl QuestionSource for Vec<Question> {
    async fn fetch(&self, amount: u32, _category: u32) -> Vec<Question> {
        self.iter().take(amount as usize).cloned().collect()
    }
}
