//! espeak-ng provider implementation
//!
//! Implements [`SpeechEngine`] on top of the espeak-ng command line tool

use super::ENGINE_NAME;
use super::config::EspeakConfig;
use super::voices::VoiceTable;
use super::worker::{self, Job};
use crate::engine::{LanguageAvailability, QueueMode, SpeechEngine, Utterance};
use crate::error::{TtsError, TtsResult};
use crate::locale::Locale;
use std::path::Path;
use std::process::Command;
use std::sync::{Mutex, MutexGuard};
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::{mpsc, watch};

/// espeak-ng backed speech engine
///
/// Owns one playback task on the current tokio runtime.
pub struct EspeakEngine {
    config: EspeakConfig,
    voices: VoiceTable,
    voice: Mutex<Option<String>>,
    jobs: Mutex<Option<mpsc::UnboundedSender<Job>>>,
    generation: watch::Sender<u64>,
}

impl EspeakEngine {
    /// List the installed voices and start the playback task.
    ///
    /// Must be called from within a tokio runtime. `espeak-ng --voices` runs
    /// synchronously; on a multi-thread runtime it runs under
    /// [`tokio::task::block_in_place`] so other tasks keep making progress.
    pub fn new(config: EspeakConfig) -> TtsResult<Self> {
        let handle = current_runtime()?;
        let voices = match handle.runtime_flavor() {
            RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| list_voices(&config.binary))?
            }
            _ => list_voices(&config.binary)?,
        };
        log::info!("{}: found {} voices", ENGINE_NAME, voices.len());
        Self::with_voices(config, voices)
    }

    /// Start the playback task with an already known voice table.
    pub fn with_voices(config: EspeakConfig, voices: VoiceTable) -> TtsResult<Self> {
        let handle = current_runtime()?;
        if config.max_input_length == 0 {
            return Err(TtsError::invalid_input(
                "max_input_length must be greater than zero",
                "Leave it unset to use the default of 4000",
            ));
        }

        let (jobs_tx, jobs_rx) = mpsc::unbounded_channel();
        let (generation_tx, generation_rx) = watch::channel(0u64);
        handle.spawn(worker::run(config.binary.clone(), jobs_rx, generation_rx));

        Ok(Self {
            voice: Mutex::new(config.default_voice.clone()),
            config,
            voices,
            jobs: Mutex::new(Some(jobs_tx)),
            generation: generation_tx,
        })
    }

    pub fn config(&self) -> &EspeakConfig {
        &self.config
    }

    pub fn voices(&self) -> &VoiceTable {
        &self.voices
    }

    /// Voice passed to espeak-ng for the next utterance
    pub fn current_voice(&self) -> Option<String> {
        lock(&self.voice).clone()
    }

    fn interrupt(&self) {
        self.generation.send_modify(|generation| *generation += 1);
    }
}

fn current_runtime() -> TtsResult<Handle> {
    Handle::try_current().map_err(|e| {
        TtsError::engine_init(format!("no tokio runtime available: {}", e), ENGINE_NAME)
    })
}

fn list_voices(binary: &Path) -> TtsResult<VoiceTable> {
    let output = Command::new(binary).arg("--voices").output().map_err(|e| {
        TtsError::engine_init(
            format!("failed to run {} --voices: {}", binary.display(), e),
            ENGINE_NAME,
        )
    })?;
    if !output.status.success() {
        return Err(TtsError::engine_init(
            format!("{} --voices exited with {}", binary.display(), output.status),
            ENGINE_NAME,
        ));
    }
    Ok(VoiceTable::parse(&String::from_utf8_lossy(&output.stdout)))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SpeechEngine for EspeakEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn is_language_available(&self, locale: &Locale) -> TtsResult<LanguageAvailability> {
        Ok(self.voices.rank(locale))
    }

    fn set_language(&self, locale: &Locale) -> TtsResult<()> {
        let voice = self.voices.voice_for(locale).ok_or_else(|| {
            TtsError::engine(format!("no installed voice for {}", locale), ENGINE_NAME)
        })?;
        log::debug!("{}: using voice {} for {}", ENGINE_NAME, voice, locale);
        *lock(&self.voice) = Some(voice);
        Ok(())
    }

    fn max_input_length(&self) -> usize {
        self.config.max_input_length
    }

    fn speak(&self, utterance: &Utterance) -> TtsResult<()> {
        let jobs = lock(&self.jobs);
        let Some(sender) = jobs.as_ref() else {
            return Err(TtsError::engine("engine is shut down", ENGINE_NAME));
        };

        if utterance.mode == QueueMode::Flush {
            self.interrupt();
        }
        let job = Job {
            generation: *self.generation.borrow(),
            utterance_id: utterance.id,
            text: utterance.text.clone(),
            args: self.config.playback_args(self.current_voice().as_deref()),
        };
        sender
            .send(job)
            .map_err(|_| TtsError::engine("playback task has stopped", ENGINE_NAME))
    }

    fn stop(&self) -> TtsResult<()> {
        self.interrupt();
        Ok(())
    }

    fn shutdown(&self) {
        self.interrupt();
        if lock(&self.jobs).take().is_some() {
            log::info!("{}: playback queue closed", ENGINE_NAME);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> EspeakEngine {
        EspeakEngine::with_voices(
            EspeakConfig::default().with_binary("/nonexistent/espeak-ng"),
            VoiceTable::from_codes(["en", "en-us", "bn"]),
        )
        .unwrap()
    }

    #[test]
    fn test_requires_runtime() {
        let result = EspeakEngine::with_voices(EspeakConfig::default(), VoiceTable::default());
        assert!(matches!(result, Err(TtsError::EngineInit(_, _))));
    }

    #[test]
    fn test_new_requires_runtime() {
        let result = EspeakEngine::new(EspeakConfig::default().with_binary("/nonexistent/espeak-ng"));
        match result {
            Err(TtsError::EngineInit(message, _)) => assert!(message.contains("runtime")),
            _ => panic!("expected EngineInit error"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_binary_fails_init_on_multi_thread_runtime() {
        let result =
            EspeakEngine::new(EspeakConfig::default().with_binary("/nonexistent/espeak-ng"));
        assert!(matches!(result, Err(TtsError::EngineInit(_, _))));
    }

    #[test]
    fn test_missing_binary_fails_init() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let _guard = rt.enter();
        let result =
            EspeakEngine::new(EspeakConfig::default().with_binary("/nonexistent/espeak-ng"));
        assert!(matches!(result, Err(TtsError::EngineInit(_, _))));
    }

    #[tokio::test]
    async fn test_set_language_picks_voice() {
        let engine = engine();
        engine.set_language(&Locale::with_region("en", "US")).unwrap();
        assert_eq!(engine.current_voice().as_deref(), Some("en-us"));

        engine.set_language(&Locale::with_region("bn", "BD")).unwrap();
        assert_eq!(engine.current_voice().as_deref(), Some("bn"));

        assert!(engine.set_language(&Locale::new("de")).is_err());
        assert_eq!(engine.current_voice().as_deref(), Some("bn"));
    }

    #[tokio::test]
    async fn test_availability_from_voice_table() {
        let engine = engine();
        assert_eq!(
            engine
                .is_language_available(&Locale::with_region("en", "US"))
                .unwrap(),
            LanguageAvailability::CountryAvailable
        );
        assert_eq!(
            engine.is_language_available(&Locale::new("fr")).unwrap(),
            LanguageAvailability::NotSupported
        );
    }

    #[tokio::test]
    async fn test_speak_after_shutdown_fails() {
        let engine = engine();
        engine.shutdown();
        let result = engine.speak(&Utterance::new("hello", QueueMode::Flush));
        assert!(matches!(result, Err(TtsError::EngineError(_, _))));
        assert!(engine.stop().is_ok());
    }
}
