//! HTTP client for the Open Trivia Database.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::QuestionSource;
use crate::error::TriviaError;
use crate::session::Question;
use crate::Result;

/// Public Open Trivia Database endpoint.
pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

/// Number of questions per session.
pub const DEFAULT_AMOUNT: u32 = 4;

/// Category 18, "Science: Computers".
pub const DEFAULT_CATEGORY: u32 = 18;

/// Connection settings for [`TriviaClient`].
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Endpoint queried with `amount` and `category` parameters.
    pub base_url: String,
    /// Request timeout; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Body returned by the provider.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    response_code: Option<i64>,
    results: Vec<Question>,
}

/// Client issuing one GET per question pool.
#[derive(Debug, Clone)]
pub struct TriviaClient {
    client: Client,
    config: ProviderConfig,
}

impl TriviaClient {
    /// Build a client from the given settings.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch `amount` questions from `category`, reporting the failure kind.
    pub async fn try_fetch(&self, amount: u32, category: u32) -> Result<Vec<Question>> {
        debug!(url = %self.config.base_url, amount, category, "fetching question pool");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("amount", amount), ("category", category)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriviaError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        let parsed: ApiResponse = serde_json::from_slice(&body)
            .map_err(|e| TriviaError::MalformedResponse(e.to_string()))?;

        if let Some(code) = parsed.response_code.filter(|&c| c != 0) {
            debug!(code, "provider returned non-zero response code");
        }

        debug!(count = parsed.results.len(), "question pool fetched");
        Ok(parsed.results)
    }
}

impl QuestionSource for TriviaClient {
    /// Any failure is logged and collapsed into an empty pool.
    async fn fetch(&self, amount: u32, category: u32) -> Vec<Question> {
        match self.try_fetch(amount, category).await {
            Ok(questions) => questions,
            Err(e) => {
                warn!(error = %e, "failed to fetch question pool");
                Vec::new()
            }
        }
    }
}
