use crate::catalog::{BuiltinLocaleCatalog, LocaleCatalog};
use crate::config::TtsConfig;
use crate::dispatcher;
use crate::engine::SpeechEngine;
use crate::locale::{Locale, resolve};
use crate::resolver;
use crate::segmenter;
use std::collections::BTreeMap;

/// Speak/stop/list-languages facade over an owned speech engine.
///
/// The engine is created by the caller, handed over here and shut down when
/// the service is dropped. Nothing on the public surface returns an error:
/// unknown languages are skipped and engine failures are logged.
pub struct TtsService<E: SpeechEngine, C: LocaleCatalog = BuiltinLocaleCatalog> {
    engine: E,
    catalog: C,
    config: TtsConfig,
}

impl<E: SpeechEngine> TtsService<E> {
    pub fn new(engine: E, config: TtsConfig) -> Self {
        Self::with_catalog(engine, BuiltinLocaleCatalog, config)
    }
}

impl<E: SpeechEngine, C: LocaleCatalog> TtsService<E, C> {
    pub fn with_catalog(engine: E, catalog: C, config: TtsConfig) -> Self {
        log::info!("{}: speech engine ready", engine.name());
        let service = Self {
            engine,
            catalog,
            config,
        };
        let startup = service.config.startup_locale();
        resolver::set_active_language(&service.engine, startup.as_ref());
        service
    }

    /// Speak `text` in the language named by `language` (e.g. "bn_BD").
    ///
    /// An unresolvable or unavailable tag keeps the engine's current language.
    pub fn speak(&self, language: &str, text: &str) {
        resolver::set_active_language(&self.engine, resolve(language).as_ref());
        self.queue_text(text);
    }

    pub fn speak_locale(&self, locale: &Locale, text: &str) {
        resolver::set_active_language(&self.engine, Some(locale));
        self.queue_text(text);
    }

    /// Interrupt the current utterance and discard the rest of the queue.
    pub fn stop(&self) {
        dispatcher::stop(&self.engine);
    }

    pub fn is_language_available(&self, locale: &Locale) -> bool {
        resolver::is_available(&self.engine, locale)
    }

    /// Catalog locales the engine can speak, keyed by tag, valued by display name.
    pub fn available_language_map(&self) -> BTreeMap<String, String> {
        self.catalog
            .all_locales()
            .into_iter()
            .filter(|locale| self.is_language_available(locale))
            .map(|locale| (locale.to_string(), locale.display_name()))
            .collect()
    }

    /// [`Self::available_language_map`] as a flat JSON object, `{}` when empty.
    pub fn available_languages(&self) -> String {
        let languages = self.available_language_map();
        let json = serde_json::to_string(&languages).unwrap_or_else(|err| {
            log::warn!("failed to serialize languages: {}", err);
            "{}".to_string()
        });
        log::debug!("{}", json);
        json
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &TtsConfig {
        &self.config
    }

    fn queue_text(&self, text: &str) {
        let max_length = self
            .config
            .effective_max_length(self.engine.max_input_length());
        let segments = segmenter::segment(text, max_length);
        dispatcher::dispatch(&self.engine, &segments);
    }
}

impl<E: SpeechEngine, C: LocaleCatalog> Drop for TtsService<E, C> {
    fn drop(&mut self) {
        log::info!("{}: shutting down speech engine", self.engine.name());
        self.engine.shutdown();
    }
}
