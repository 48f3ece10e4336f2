use anyhow::{Context, Result};
use std::path::PathBuf;

/// Credential for the completion provider (required)
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Alternative provider endpoint (optional)
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

/// Connection settings for the completion provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    /// API root without trailing slash, e.g. https://api.openai.com/v1
    pub base_url: String,
    pub model: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Provider credentials and model
    pub provider: ProviderConfig,

    /// Directory the CSV export is written into (default: ./output)
    pub output_dir: PathBuf,
}

/// Values given on the command line that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--model` / `CONTRACTORS_MODEL`
    pub model: Option<String>,
    /// `--output-dir`
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// `.env` in the working directory is expected to be loaded by the caller
    /// before this runs.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, overrides: ConfigOverrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("{} must be set", API_KEY_VAR))?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_base_url)
            .trim_end_matches('/')
            .to_string();

        let config = Self {
            provider: ProviderConfig {
                api_key,
                base_url,
                model: overrides.model.unwrap_or_else(default_model),
            },
            output_dir: overrides.output_dir.unwrap_or_else(default_output_dir),
        };

        tracing::debug!("Provider base_url: {}", config.provider.base_url);
        tracing::debug!("Model: {}", config.provider.model);
        tracing::debug!("Output dir: {}", config.output_dir.display());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config =
            AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test")]), Default::default())
                .unwrap();

        assert_eq!(config.provider.api_key, "sk-test");
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.provider.model, "gpt-5-mini");
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = AppConfig::from_lookup(lookup_from(&[]), Default::default()).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY must be set"));
    }

    #[test]
    fn test_blank_api_key_fails() {
        let result =
            AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")]), Default::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_and_base_url() {
        let overrides = ConfigOverrides {
            model: Some("gpt-5".to_string()),
            output_dir: Some(PathBuf::from("/tmp/exports")),
        };
        let config = AppConfig::from_lookup(
            lookup_from(&[
                (API_KEY_VAR, "sk-test"),
                (BASE_URL_VAR, "http://localhost:8080/v1/"),
            ]),
            overrides,
        )
        .unwrap();

        assert_eq!(config.provider.base_url, "http://localhost:8080/v1");
        assert_eq!(config.provider.model, "gpt-5");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/exports"));
    }
}
