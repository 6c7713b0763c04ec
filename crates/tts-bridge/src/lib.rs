//! # tts-bridge
//!
//! Thin adapter between an application and a speech-synthesis engine.
//!
//! The crate does three things on the speak path:
//!
//! 1. **Locale resolution**: `"bn_BD"` becomes a [`Locale`], which is checked
//!    against what the engine can speak before switching to it.
//! 2. **Segmentation**: long text is cut into pieces that fit the engine's
//!    per-utterance limit, breaking on spaces where possible.
//! 3. **Dispatch**: the first piece flushes the engine queue, the rest are
//!    appended behind it.
//!
//! Engines plug in through the [`SpeechEngine`] trait. Speech output is treated
//! as best effort, so [`TtsService`] never returns errors from `speak`, `stop`
//! or `available_languages`.
//!
//! ## Providers
//!
//! - [`providers::memory::RecordingEngine`]: records calls, used in tests and dry runs
//! - `espeak` feature: `providers::espeak::EspeakEngine` drives the `espeak-ng` binary
//!
//! ## Example
//!
//! ```rust
//! use tts_bridge::providers::memory::RecordingEngine;
//! use tts_bridge::{TtsConfig, TtsService};
//!
//! let engine = RecordingEngine::new()
//!     .with_languages(["en_US"])
//!     .with_max_input_length(10);
//! let tts = TtsService::new(engine, TtsConfig::default());
//!
//! tts.speak("en_US", "The quick brown fox jumps");
//! assert_eq!(tts.engine().queued(), vec!["The quick", "brown fox", "jumps"]);
//! assert_eq!(tts.available_languages(), r#"{"en_US":"English (United States)"}"#);
//! ```

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod locale;
mod names;
pub mod resolver;
pub mod segmenter;
mod service;

// Engine implementations
pub mod providers;

pub use catalog::{BuiltinLocaleCatalog, LocaleCatalog};
pub use config::TtsConfig;
pub use engine::{LanguageAvailability, QueueMode, SpeechEngine, Utterance};
pub use error::{LocaleError, TtsError, TtsResult};
pub use locale::{Locale, resolve};
pub use segmenter::{TextSegmenter, segment};
pub use service::TtsService;
