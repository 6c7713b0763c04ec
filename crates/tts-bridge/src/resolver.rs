//! Availability checks and language switching.
//!
//! Engine errors are never propagated from here: a failed query counts as
//! "not available" and a failed switch leaves the current language in place.

use crate::engine::SpeechEngine;
use crate::locale::{Locale, resolve};

/// True only if the engine reports a usable rank for `locale`.
pub fn is_available<E: SpeechEngine + ?Sized>(engine: &E, locale: &Locale) -> bool {
    match engine.is_language_available(locale) {
        Ok(rank) => rank.is_available(),
        Err(err) => {
            log::debug!(
                "{}: availability query for {} failed: {}",
                engine.name(),
                locale,
                err
            );
            false
        }
    }
}

/// Switch the engine to `locale` if it is resolved and available.
///
/// Returns whether a switch was requested.
pub fn set_active_language<E: SpeechEngine + ?Sized>(engine: &E, locale: Option<&Locale>) -> bool {
    let Some(locale) = locale else {
        return false;
    };
    if !is_available(engine, locale) {
        log::debug!("{}: language {} not available", engine.name(), locale);
        return false;
    }

    log::debug!("language set: {}", locale);
    if let Err(err) = engine.set_language(locale) {
        log::warn!("{}: failed to set language {}: {}", engine.name(), locale, err);
    }
    true
}

/// Resolve `tag` and switch to it, see [`set_active_language`].
pub fn set_active_language_tag<E: SpeechEngine + ?Sized>(engine: &E, tag: &str) -> bool {
    set_active_language(engine, resolve(tag).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LanguageAvailability;
    use crate::providers::memory::{EngineCall, RecordingEngine};

    #[test]
    fn test_available_ranks_pass() {
        let engine = RecordingEngine::new()
            .with_language("en_US", LanguageAvailability::CountryAvailable)
            .with_language("de", LanguageAvailability::MissingData);

        assert!(is_available(&engine, &Locale::with_region("en", "US")));
        assert!(!is_available(&engine, &Locale::new("de")));
        assert!(!is_available(&engine, &Locale::new("fr")));
    }

    #[test]
    fn test_query_failure_is_unavailable() {
        let engine = RecordingEngine::new()
            .with_language("en", LanguageAvailability::Available)
            .failing_queries();

        assert!(!is_available(&engine, &Locale::new("en")));
    }

    #[test]
    fn test_set_language_skips_unresolved_and_unavailable() {
        let engine = RecordingEngine::new().with_language("bn_BD", LanguageAvailability::CountryAvailable);

        assert!(!set_active_language_tag(&engine, "a_b_c_d"));
        assert!(!set_active_language_tag(&engine, "fr_FR"));
        assert!(engine.calls().is_empty());

        assert!(set_active_language_tag(&engine, "bn_BD"));
        assert_eq!(
            engine.calls(),
            vec![EngineCall::SetLanguage(Locale::with_region("bn", "BD"))]
        );
    }

    #[test]
    fn test_set_language_failure_is_swallowed() {
        let engine = RecordingEngine::new()
            .with_language("en", LanguageAvailability::Available)
            .failing_commands();

        assert!(set_active_language(&engine, Some(&Locale::new("en"))));
        assert!(engine.current_language().is_none());
    }
}
