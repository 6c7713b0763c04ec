use thiserror::Error;

/// Errors raised while constructing or talking to a speech engine
#[derive(Error, Debug)]
pub enum TtsError {
    /// Invalid argument passed to a constructor
    #[error("Invalid input: {0}\nSuggestion: {1}")]
    InvalidInput(String, String),

    /// Engine could not be started
    #[error(
        "Speech engine initialization failed: {0}\nEngine: {1}\nSuggestion: Check that the engine binary is installed and on PATH"
    )]
    EngineInit(String, String),

    /// Engine-side failure during a call
    #[error(
        "Speech engine error: {0}\nEngine: {1}\nDetails: This error originated from the engine implementation"
    )]
    EngineError(String, String),

    /// IO error
    #[error("IO error during TTS operation: {0}\nOperation: {1}")]
    Io(std::io::Error, String),

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {0}\nSource: {1}")]
    Config(String, String),
}

impl TtsError {
    pub fn invalid_input(msg: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into(), suggestion.into())
    }

    pub fn engine_init(msg: impl Into<String>, engine: impl Into<String>) -> Self {
        Self::EngineInit(msg.into(), engine.into())
    }

    pub fn engine(msg: impl Into<String>, engine: impl Into<String>) -> Self {
        Self::EngineError(msg.into(), engine.into())
    }

    pub fn io(err: std::io::Error, operation: impl Into<String>) -> Self {
        Self::Io(err, operation.into())
    }
}

/// Result type for TTS operations
pub type TtsResult<T> = Result<T, TtsError>;

/// Reasons a language tag cannot be turned into a [`crate::Locale`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Language tag is empty")]
    Empty,

    #[error(
        "Language tag '{0}' has {1} parts\nSuggestion: Use at most language_REGION_variant, e.g. \"en_US_POSIX\""
    )]
    TooManyParts(String, usize),

    #[error("Language tag '{0}' has no language part\nSuggestion: Start the tag with a language code, e.g. \"bn_BD\"")]
    EmptyLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = TtsError::engine("queue closed", "espeak-ng");
        let msg = err.to_string();
        assert!(msg.contains("queue closed"));
        assert!(msg.contains("espeak-ng"));

        let err = LocaleError::TooManyParts("a_b_c_d".to_string(), 4);
        assert!(err.to_string().contains("4 parts"));
    }
}
