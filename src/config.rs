//! Configuration management for trivia-quiz.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::provider::{ProviderConfig, DEFAULT_AMOUNT, DEFAULT_API_URL, DEFAULT_CATEGORY};
use crate::shell::ShellLayout;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trivia provider configuration.
    pub provider: ProviderSection,
    /// Shell configuration.
    pub shell: ShellSection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Trivia provider section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Endpoint URL.
    pub base_url: String,
    /// Questions per round.
    pub amount: u32,
    /// Category id.
    pub category: u32,
    /// Request timeout in seconds; unset keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            amount: DEFAULT_AMOUNT,
            category: DEFAULT_CATEGORY,
            timeout_secs: None,
        }
    }
}

/// Shell configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSection {
    /// Which layout to present.
    pub layout: ShellLayout,
}

/// Logging configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log filter (error, warn, info, debug, trace or a directive list).
    /// Unset falls back to `RUST_LOG`, then `trivia_quiz=info`.
    pub level: Option<String>,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Values that do not parse are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TRIVIA_API_URL") {
            if !url.is_empty() {
                self.provider.base_url = url;
            }
        }

        if let Some(amount) = lookup("TRIVIA_AMOUNT") {
            if let Ok(amount) = amount.parse() {
                self.provider.amount = amount;
            }
        }

        if let Some(category) = lookup("TRIVIA_CATEGORY") {
            if let Ok(category) = category.parse() {
                self.provider.category = category;
            }
        }

        if let Some(layout) = lookup("TRIVIA_LAYOUT") {
            if let Ok(layout) = layout.parse() {
                self.shell.layout = layout;
            }
        }

        if let Some(level) = lookup("TRIVIA_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            self.logging.level = Some(level);
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(amount) = args.amount {
            self.provider.amount = amount;
        }

        if let Some(category) = args.category {
            self.provider.category = category;
        }

        if let Some(ref url) = args.api_url {
            self.provider.base_url = url.clone();
        }

        if let Some(layout) = args.layout {
            self.shell.layout = layout;
        }

        if let Some(secs) = args.timeout_secs {
            self.provider.timeout_secs = Some(secs);
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = Some(level.clone());
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        Self::load_with_env(args, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with environment lookups routed through `lookup`.
    pub fn load_with_env<F>(args: &Args, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match args.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env_from(lookup);
        config.apply_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the provider can never satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.provider.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.clone()));
        }
        if self.provider.amount == 0 {
            return Err(ConfigError::InvalidAmount(self.provider.amount));
        }
        Ok(())
    }

    /// Convert to the provider client's settings.
    pub fn to_provider_config(&self) -> ProviderConfig {
        let config = ProviderConfig::new(self.provider.base_url.clone());
        match self.provider.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Configured log filter, if any.
    pub fn log_filter(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// Provider URL is not http(s).
    InvalidUrl(String),
    /// Question amount must be positive.
    InvalidAmount(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::InvalidUrl(url) => write!(f, "invalid provider URL: {}", url),
            Self::InvalidAmount(n) => write!(f, "invalid question amount: {}", n),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.base_url, "https://opentdb.com/api.php");
        assert_eq!(config.provider.amount, 4);
        assert_eq!(config.provider.category, 18);
        assert_eq!(config.shell.layout, ShellLayout::Menu);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "provider": {
                "base_url": "http://127.0.0.1:8080/api.php",
                "amount": 10,
                "category": 9,
                "timeout_secs": 5
            },
            "shell": { "layout": "embedded" }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.provider.base_url, "http://127.0.0.1:8080/api.php");
        assert_eq!(config.provider.amount, 10);
        assert_eq!(config.provider.category, 9);
        assert_eq!(config.provider.timeout_secs, Some(5));
        assert_eq!(config.shell.layout, ShellLayout::Embedded);
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{ "provider": { "amount": 7 } }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.provider.category, 18); // Default
        assert_eq!(config.provider.amount, 7);
    }

    #[test]
    fn test_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        let args = Args {
            amount: Some(12),
            layout: Some(ShellLayout::Embedded),
            timeout_secs: Some(3),
            ..Args::default()
        };

        config.apply_args(&args);

        assert_eq!(config.provider.amount, 12);
        assert_eq!(config.provider.category, 18);
        assert_eq!(config.shell.layout, ShellLayout::Embedded);
        assert_eq!(config.provider.timeout_secs, Some(3));
    }

    #[test]
    fn test_unset_args_keep_file_values() {
        let mut config = Config::default();
        config.provider.category = 9;
        config.apply_args(&Args::default());
        assert_eq!(config.provider.category, 9);
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_env_from(env(&[
            ("TRIVIA_API_URL", "http://127.0.0.1:9000/api.php"),
            ("TRIVIA_AMOUNT", "7"),
            ("TRIVIA_CATEGORY", "9"),
            ("TRIVIA_LAYOUT", "embedded"),
        ]));

        assert_eq!(config.provider.base_url, "http://127.0.0.1:9000/api.php");
        assert_eq!(config.provider.amount, 7);
        assert_eq!(config.provider.category, 9);
        assert_eq!(config.shell.layout, ShellLayout::Embedded);
        assert!(config.log_filter().is_none());
    }

    #[test]
    fn test_apply_env_skips_bad_values() {
        let mut config = Config::default();
        config.apply_env_from(env(&[
            ("TRIVIA_API_URL", ""),
            ("TRIVIA_AMOUNT", "abc"),
            ("TRIVIA_CATEGORY", "-1"),
            ("TRIVIA_LAYOUT", "fullscreen"),
        ]));

        assert_eq!(config.provider.base_url, "https://opentdb.com/api.php");
        assert_eq!(config.provider.amount, 4);
        assert_eq!(config.provider.category, 18);
        assert_eq!(config.shell.layout, ShellLayout::Menu);
    }

    #[test]
    fn test_trivia_log_level_beats_rust_log() {
        let mut config = Config::default();
        config.apply_env_from(env(&[("TRIVIA_LOG_LEVEL", "debug"), ("RUST_LOG", "trace")]));
        assert_eq!(config.log_filter(), Some("debug"));

        let mut config = Config::default();
        config.apply_env_from(env(&[("RUST_LOG", "trace")]));
        assert_eq!(config.log_filter(), Some("trace"));
    }

    #[test]
    fn test_cli_beats_env() {
        let args = Args {
            amount: Some(2),
            log_level: Some("error".to_string()),
            ..Args::default()
        };
        let config = Config::load_with_env(
            &args,
            env(&[
                ("TRIVIA_AMOUNT", "9"),
                ("TRIVIA_CATEGORY", "22"),
                ("TRIVIA_LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.provider.amount, 2);
        assert_eq!(config.provider.category, 22);
        assert_eq!(config.log_filter(), Some("error"));
    }

    #[test]
    fn test_env_amount_zero_rejected() {
        let result = Config::load_with_env(&Args::default(), env(&[("TRIVIA_AMOUNT", "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidAmount(0))));
    }

    #[test]
    fn test_default_log_filter_unset() {
        assert!(Config::default().log_filter().is_none());
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.provider.base_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_amount() {
        let mut config = Config::default();
        config.provider.amount = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAmount(0))
        ));
    }

    #[test]
    fn test_to_provider_config() {
        let mut config = Config::default();
        assert!(config.to_provider_config().timeout.is_none());

        config.provider.timeout_secs = Some(8);
        let provider = config.to_provider_config();
        assert_eq!(provider.base_url, "https://opentdb.com/api.php");
        assert_eq!(provider.timeout, Some(Duration::from_secs(8)));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"base_url\""));
        assert!(json.contains("\"layout\": \"menu\""));
    }
}
