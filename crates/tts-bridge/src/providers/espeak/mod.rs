//! espeak-ng provider
//!
//! Speaks through the `espeak-ng` binary. Installed voices are read once from
//! `espeak-ng --voices`; utterances are played in order by a background task,
//! one process per utterance.
//!
//! # Examples
//!
//! ```no_run
//! use tts_bridge::providers::espeak::{EspeakConfig, EspeakEngine};
//! use tts_bridge::{TtsConfig, TtsService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = EspeakEngine::new(EspeakConfig::default())?;
//!     let tts = TtsService::new(engine, TtsConfig::default());
//!
//!     tts.speak("en_US", "Hello, world!");
//!     tokio::time::sleep(std::time::Duration::from_secs(2)).await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod voices;

mod provider;
mod worker;

const ENGINE_NAME: &str = "espeak-ng";

pub use config::EspeakConfig;
pub use provider::EspeakEngine;
pub use voices::VoiceTable;
