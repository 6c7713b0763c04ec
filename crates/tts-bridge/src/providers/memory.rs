//! In-process engine that records every call instead of producing audio.

use crate::engine::{LanguageAvailability, QueueMode, SpeechEngine, Utterance};
use crate::error::{TtsError, TtsResult};
use crate::locale::Locale;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

const ENGINE_NAME: &str = "memory";

/// Matches the limit reported by common platform engines
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 4000;

/// A call observed by [`RecordingEngine`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineCall {
    SetLanguage(Locale),
    Speak { text: String, mode: QueueMode },
    Stop,
    Shutdown,
}

#[derive(Default)]
struct RecorderState {
    calls: Vec<EngineCall>,
    language: Option<Locale>,
    queue: Vec<Utterance>,
}

/// Engine double with scripted language support and a call log
pub struct RecordingEngine {
    availability: HashMap<String, LanguageAvailability>,
    max_input_length: usize,
    fail_queries: bool,
    fail_commands: bool,
    state: Mutex<RecorderState>,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            availability: HashMap::new(),
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            fail_queries: false,
            fail_commands: false,
            state: Mutex::new(RecorderState::default()),
        }
    }

    /// Report `rank` for the locale named by `tag`. Unparseable tags are ignored.
    pub fn with_language(mut self, tag: &str, rank: LanguageAvailability) -> Self {
        match tag.parse::<Locale>() {
            Ok(locale) => {
                self.availability.insert(locale.to_string(), rank);
            }
            Err(err) => log::warn!("{}: ignoring language '{}': {}", ENGINE_NAME, tag, err),
        }
        self
    }

    /// Report every locale in `tags` as available
    pub fn with_languages<'a>(self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        tags.into_iter().fold(self, |engine, tag| {
            engine.with_language(tag, LanguageAvailability::Available)
        })
    }

    /// Report every locale in `locales` as available
    pub fn with_locales(mut self, locales: impl IntoIterator<Item = Locale>) -> Self {
        for locale in locales {
            self.availability
                .insert(locale.to_string(), LanguageAvailability::Available);
        }
        self
    }

    pub fn with_max_input_length(mut self, max: usize) -> Self {
        self.max_input_length = max;
        self
    }

    /// Make every availability query return an error
    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    /// Make set_language, speak and stop return an error
    pub fn failing_commands(mut self) -> Self {
        self.fail_commands = true;
        self
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.state().calls.clone()
    }

    /// Text of the utterances that would currently be playing or queued
    pub fn queued(&self) -> Vec<String> {
        self.state().queue.iter().map(|u| u.text.clone()).collect()
    }

    pub fn current_language(&self) -> Option<Locale> {
        self.state().language.clone()
    }

    /// Forget the calls recorded so far; the queue and language are kept
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    fn state(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_command(&self, operation: &str) -> TtsResult<()> {
        if self.fail_commands {
            return Err(TtsError::engine(
                format!("{} rejected", operation),
                ENGINE_NAME,
            ));
        }
        Ok(())
    }
}

impl SpeechEngine for RecordingEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn is_language_available(&self, locale: &Locale) -> TtsResult<LanguageAvailability> {
        if self.fail_queries {
            return Err(TtsError::engine(
                format!("availability query for {} failed", locale),
                ENGINE_NAME,
            ));
        }
        Ok(self
            .availability
            .get(&locale.to_string())
            .copied()
            .unwrap_or(LanguageAvailability::NotSupported))
    }

    fn set_language(&self, locale: &Locale) -> TtsResult<()> {
        self.check_command("set_language")?;
        let mut state = self.state();
        state.language = Some(locale.clone());
        state.calls.push(EngineCall::SetLanguage(locale.clone()));
        Ok(())
    }

    fn max_input_length(&self) -> usize {
        self.max_input_length
    }

    fn speak(&self, utterance: &Utterance) -> TtsResult<()> {
        self.check_command("speak")?;
        let mut state = self.state();
        if utterance.mode == QueueMode::Flush {
            state.queue.clear();
        }
        state.queue.push(utterance.clone());
        state.calls.push(EngineCall::Speak {
            text: utterance.text.clone(),
            mode: utterance.mode,
        });
        Ok(())
    }

    fn stop(&self) -> TtsResult<()> {
        self.check_command("stop")?;
        let mut state = self.state();
        state.queue.clear();
        state.calls.push(EngineCall::Stop);
        Ok(())
    }

    fn shutdown(&self) {
        let mut state = self.state();
        state.queue.clear();
        state.calls.push(EngineCall::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_replaces_queue() {
        let engine = RecordingEngine::new();
        engine.speak(&Utterance::new("one", QueueMode::Flush)).unwrap();
        engine.speak(&Utterance::new("two", QueueMode::Append)).unwrap();
        assert_eq!(engine.queued(), vec!["one", "two"]);

        engine.speak(&Utterance::new("three", QueueMode::Flush)).unwrap();
        assert_eq!(engine.queued(), vec!["three"]);

        engine.stop().unwrap();
        assert!(engine.queued().is_empty());
    }

    #[test]
    fn test_unknown_language_is_not_supported() {
        let engine = RecordingEngine::new().with_languages(["en", "de_DE"]);
        assert_eq!(
            engine.is_language_available(&Locale::new("en")).unwrap(),
            LanguageAvailability::Available
        );
        assert_eq!(
            engine.is_language_available(&Locale::new("fr")).unwrap(),
            LanguageAvailability::NotSupported
        );
    }

    #[test]
    fn test_invalid_tag_is_ignored() {
        let engine = RecordingEngine::new().with_language("", LanguageAvailability::Available);
        assert_eq!(
            engine.is_language_available(&Locale::default()).unwrap(),
            LanguageAvailability::NotSupported
        );
    }

    #[test]
    fn test_with_locales_matches_catalog() {
        use crate::catalog::{BuiltinLocaleCatalog, LocaleCatalog};

        let locales = BuiltinLocaleCatalog.all_locales();
        let engine = RecordingEngine::new().with_locales(locales.clone());
        for locale in &locales {
            assert!(engine.is_language_available(locale).unwrap().is_available());
        }
    }

    #[test]
    fn test_clear_calls_keeps_state() {
        let engine = RecordingEngine::new();
        engine.set_language(&Locale::new("en")).unwrap();
        engine.speak(&Utterance::new("one", QueueMode::Flush)).unwrap();

        engine.clear_calls();
        assert!(engine.calls().is_empty());
        assert_eq!(engine.queued(), vec!["one"]);
        assert_eq!(engine.current_language(), Some(Locale::new("en")));

        engine.stop().unwrap();
        assert_eq!(engine.calls(), vec![EngineCall::Stop]);
    }
}
