// quillsql-core/src/domain/settings.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::domain::error::DomainError;

pub const DEFAULT_MODEL: &str = "anthropic:claude-sonnet-4-20250514";
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///fake.db";

#[derive(Debug, Deserialize, Serialize, Clone, Default, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub llm: LlmSettings,

    #[serde(default)]
    #[validate(nested)]
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidSettings(e.to_string()))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct LlmSettings {
    #[serde(default = "default_model")]
    #[validate(length(min = 1, message = "Model identifier cannot be empty"))]
    pub model: String,

    #[serde(default = "default_api_base")]
    #[validate(length(min = 1, message = "API base URL cannot be empty"))]
    pub api_base: String,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub temperature: Option<f64>,

    #[serde(default = "default_max_tokens")]
    #[validate(range(min = 1))]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            temperature: None,
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    #[validate(length(min = 1, message = "Database URL cannot be empty"))]
    pub url: String,

    /// Row limit suggested to the model when the question does not ask for one.
    #[serde(default = "default_top_k")]
    #[validate(range(min = 1))]
    pub top_k: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            top_k: default_top_k(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}
fn default_max_tokens() -> u32 {
    1024
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}
fn default_top_k() -> u32 {
    5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
}

/// A `<provider>:<model>` identifier, e.g. `anthropic:claude-sonnet-4-20250514`.
/// A bare `claude-*` name is accepted as an Anthropic model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelId {
    pub provider: Provider,
    pub name: String,
}

impl FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (provider, name) = match s.split_once(':') {
            Some(("anthropic", name)) => (Provider::Anthropic, name),
            Some(_) => return Err(DomainError::UnknownModel(s.to_string())),
            None if s.starts_with("claude") => (Provider::Anthropic, s),
            None => return Err(DomainError::UnknownModel(s.to_string())),
        };
        if name.is_empty() {
            return Err(DomainError::UnknownModel(s.to_string()));
        }
        Ok(Self {
            provider,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.provider {
            Provider::Anthropic => write!(f, "anthropic:{}", self.name),
        }
    }
}

/// Per-call model parameters handed to a `ChatModel`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: ModelId,
    pub temperature: Option<f64>,
    pub max_tokens: u32,
}

impl ModelSettings {
    pub fn from_llm(llm: &LlmSettings) -> Result<Self, DomainError> {
        Ok(Self {
            model: llm.model.parse()?,
            temperature: llm.temperature,
            max_tokens: llm.max_tokens,
        })
    }

    pub fn with_temperature(&self, temperature: Option<f64>) -> Self {
        Self {
            temperature,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_model_id_with_provider_prefix() -> Result<()> {
        let id: ModelId = DEFAULT_MODEL.parse()?;
        assert_eq!(id.provider, Provider::Anthropic);
        assert_eq!(id.name, "claude-sonnet-4-20250514");
        assert_eq!(id.to_string(), DEFAULT_MODEL);
        Ok(())
    }

    #[test]
    fn test_model_id_bare_claude_name() -> Result<()> {
        let id: ModelId = "claude-3-5-haiku-latest".parse()?;
        assert_eq!(id.provider, Provider::Anthropic);
        Ok(())
    }

    #[test]
    fn test_model_id_rejects_unknown_provider() {
        assert!("openai:gpt-4o".parse::<ModelId>().is_err());
        assert!("gpt-4o".parse::<ModelId>().is_err());
        assert!("anthropic:".parse::<ModelId>().is_err());
    }

    #[test]
    fn test_defaults_from_empty_yaml() -> Result<()> {
        let config: AppConfig = serde_yaml::from_str("{}")?;
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.temperature, None);
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.top_k, 5);
        config.check()?;
        Ok(())
    }

    #[test]
    fn test_validation_rejects_out_of_range_values() {
        let mut config = AppConfig::default();
        config.llm.temperature = Some(1.5);
        assert!(config.check().is_err());

        let mut config = AppConfig::default();
        config.database.top_k = 0;
        assert!(config.check().is_err());
    }

    #[test]
    fn test_with_temperature_overrides_only_temperature() -> Result<()> {
        let base = ModelSettings::from_llm(&LlmSettings::default())?;
        let zero = base.with_temperature(Some(0.0));
        assert_eq!(zero.temperature, Some(0.0));
        assert_eq!(zero.model, base.model);
        assert_eq!(zero.max_tokens, base.max_tokens);
        Ok(())
    }
}
