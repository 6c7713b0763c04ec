//! Configuration for the espeak-ng provider

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the espeak-ng binary
pub const ESPEAK_BIN_ENV: &str = "ESPEAK_BIN";

/// Configuration for the espeak-ng provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EspeakConfig {
    /// Path or name of the espeak-ng binary (default: $ESPEAK_BIN or "espeak-ng")
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Voice used until a language is selected (e.g. "en-us")
    #[serde(default)]
    pub default_voice: Option<String>,

    /// Speaking rate in words per minute (espeak-ng default: 175)
    #[serde(default)]
    pub words_per_minute: Option<u32>,

    /// Amplitude 0-200 (espeak-ng default: 100)
    #[serde(default)]
    pub amplitude: Option<u32>,

    /// Longest text handed to a single espeak-ng process (default: 4000)
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,
}

fn default_binary() -> PathBuf {
    std::env::var_os(ESPEAK_BIN_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("espeak-ng"))
}

fn default_max_input_length() -> usize {
    4000
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            default_voice: None,
            words_per_minute: None,
            amplitude: None,
            max_input_length: default_max_input_length(),
        }
    }
}

impl EspeakConfig {
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_default_voice(mut self, voice: impl Into<String>) -> Self {
        self.default_voice = Some(voice.into());
        self
    }

    pub fn with_words_per_minute(mut self, wpm: u32) -> Self {
        self.words_per_minute = Some(wpm);
        self
    }

    /// Arguments passed before the text of every utterance
    pub(super) fn playback_args(&self, voice: Option<&str>) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(voice) = voice {
            args.push("-v".to_string());
            args.push(voice.to_string());
        }
        if let Some(wpm) = self.words_per_minute {
            args.push("-s".to_string());
            args.push(wpm.to_string());
        }
        if let Some(amplitude) = self.amplitude {
            args.push("-a".to_string());
            args.push(amplitude.to_string());
        }
        args
    }
}
