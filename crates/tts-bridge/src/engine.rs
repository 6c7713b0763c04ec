use crate::error::TtsResult;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// How a submitted utterance interacts with the engine queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueMode {
    /// Drop everything queued or playing and start this utterance now
    Flush,
    /// Play after everything already submitted
    Append,
}

/// Availability rank reported by an engine for a locale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageAvailability {
    /// Language, region and variant all match
    CountryVariantAvailable,
    /// Language and region match
    CountryAvailable,
    /// Only the language matches
    Available,
    /// Supported but the voice data is not installed
    MissingData,
    NotSupported,
}

impl LanguageAvailability {
    /// Whether the engine can actually speak this locale
    pub fn is_available(self) -> bool {
        matches!(
            self,
            Self::CountryVariantAvailable | Self::CountryAvailable | Self::Available
        )
    }
}

/// One unit of text submitted to an engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utterance {
    pub id: Uuid,
    pub text: String,
    pub mode: QueueMode,
}

impl Utterance {
    pub fn new(text: impl Into<String>, mode: QueueMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            mode,
        }
    }
}

/// Port to an external speech-synthesis engine.
///
/// Engines are shared, so every method takes `&self`; implementations keep
/// their queue and current language behind interior mutability. `speak` must
/// return as soon as the utterance is queued, never when it finishes playing.
pub trait SpeechEngine: Send + Sync {
    /// Short engine identifier used in logs and errors
    fn name(&self) -> &str;

    /// Classify how well the engine supports `locale`
    fn is_language_available(&self, locale: &Locale) -> TtsResult<LanguageAvailability>;

    /// Switch the active language (best effort)
    fn set_language(&self, locale: &Locale) -> TtsResult<()>;

    /// Upper bound on the length of a single utterance, in characters
    fn max_input_length(&self) -> usize;

    /// Queue an utterance according to its [`QueueMode`]
    fn speak(&self, utterance: &Utterance) -> TtsResult<()>;

    /// Interrupt playback and discard the queue
    fn stop(&self) -> TtsResult<()>;

    /// Release engine resources. Called once by the owning service on drop.
    fn shutdown(&self) {}
}

macro_rules! forward_engine {
    ($($wrapper:ident),*) => {$(
        impl<E: SpeechEngine + ?Sized> SpeechEngine for $wrapper<E> {
            fn name(&self) -> &str {
                (**self).name()
            }

            fn is_language_available(&self, locale: &Locale) -> TtsResult<LanguageAvailability> {
                (**self).is_language_available(locale)
            }

            fn set_language(&self, locale: &Locale) -> TtsResult<()> {
                (**self).set_language(locale)
            }

            fn max_input_length(&self) -> usize {
                (**self).max_input_length()
            }

            fn speak(&self, utterance: &Utterance) -> TtsResult<()> {
                (**self).speak(utterance)
            }

            fn stop(&self) -> TtsResult<()> {
                (**self).stop()
            }

            fn shutdown(&self) {
                (**self).shutdown()
            }
        }
    )*};
}

forward_engine!(Box, Arc);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_ranks() {
        assert!(LanguageAvailability::CountryVariantAvailable.is_available());
        assert!(LanguageAvailability::CountryAvailable.is_available());
        assert!(LanguageAvailability::Available.is_available());
        assert!(!LanguageAvailability::MissingData.is_available());
        assert!(!LanguageAvailability::NotSupported.is_available());
    }

    #[test]
    fn test_utterance_ids_are_unique() {
        let a = Utterance::new("a", QueueMode::Flush);
        let b = Utterance::new("a", QueueMode::Flush);
        assert_ne!(a.id, b.id);
    }
}
