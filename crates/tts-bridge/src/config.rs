//! Configuration for [`crate::TtsService`]

use crate::error::{TtsError, TtsResult};
use crate::locale::{Locale, resolve, system_locale};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Language tag applied at start-up (e.g. "en_US")
    #[serde(default)]
    pub default_language: Option<String>,

    /// Use the process locale when `default_language` is unset (default: true)
    #[serde(default = "default_use_system_locale")]
    pub use_system_locale: bool,

    /// Optional cap below the engine's own maximum utterance length
    #[serde(default)]
    pub max_input_length: Option<usize>,
}

fn default_use_system_locale() -> bool {
    true
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            default_language: None,
            use_system_locale: default_use_system_locale(),
            max_input_length: None,
        }
    }
}

impl TtsConfig {
    pub fn with_default_language(mut self, tag: impl Into<String>) -> Self {
        self.default_language = Some(tag.into());
        self
    }

    pub fn without_system_locale(mut self) -> Self {
        self.use_system_locale = false;
        self
    }

    pub fn with_max_input_length(mut self, max: usize) -> Self {
        self.max_input_length = Some(max);
        self
    }

    pub fn from_toml_str(input: &str) -> TtsResult<Self> {
        toml::from_str(input).map_err(|e| TtsError::Config(e.to_string(), "toml".to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> TtsResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TtsError::io(e, format!("read config {}", path.display())))?;
        toml::from_str(&raw).map_err(|e| TtsError::Config(e.to_string(), path.display().to_string()))
    }

    /// Locale to apply when the service starts
    pub fn startup_locale(&self) -> Option<Locale> {
        match &self.default_language {
            Some(tag) => resolve(tag),
            None if self.use_system_locale => system_locale(),
            None => None,
        }
    }

    /// Effective utterance limit given the engine's own maximum
    pub fn effective_max_length(&self, engine_max: usize) -> usize {
        match self.max_input_length {
            Some(cap) => cap.min(engine_max),
            None => engine_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TtsConfig::default();
        assert_eq!(config.default_language, None);
        assert_eq!(config.max_input_length, None);
        assert!(config.use_system_locale);
        assert_eq!(config.effective_max_length(4000), 4000);
        assert_eq!(config.without_system_locale().startup_locale(), None);
    }

    #[test]
    fn test_config_from_toml() {
        let config = TtsConfig::from_toml_str(
            r#"
            default_language = "bn_BD"
            max_input_length = 200
            "#,
        )
        .unwrap();
        assert_eq!(config.default_language.as_deref(), Some("bn_BD"));
        assert_eq!(config.effective_max_length(4000), 200);
        assert_eq!(config.effective_max_length(100), 100);
        assert_eq!(
            config.startup_locale(),
            Some(Locale::with_region("bn", "BD"))
        );
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(TtsConfig::from_toml_str("").unwrap(), TtsConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TtsConfig::from_toml_str("max_input_length = \"lots\"").unwrap_err();
        assert!(matches!(err, TtsError::Config(_, _)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tts.toml");
        std::fs::write(&path, "default_language = \"de_DE\"\n").unwrap();

        let config = TtsConfig::load(&path).unwrap();
        assert_eq!(config.default_language.as_deref(), Some("de_DE"));

        let missing = TtsConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, TtsError::Io(_, _)));
    }

    #[test]
    fn test_config_serialization() {
        let config = TtsConfig::default().with_default_language("en_US");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TtsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
