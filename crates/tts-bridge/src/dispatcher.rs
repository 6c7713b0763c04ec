use crate::engine::{QueueMode, SpeechEngine, Utterance};

/// Submit `segments` in order: the first flushes the engine queue, the rest append.
///
/// Engine errors are logged and skipped so later segments still get queued.
/// Returns how many submissions the engine accepted.
pub fn dispatch<E, S>(engine: &E, segments: &[S]) -> usize
where
    E: SpeechEngine + ?Sized,
    S: AsRef<str>,
{
    let mut accepted = 0;
    for (idx, segment) in segments.iter().enumerate() {
        let mode = if idx == 0 {
            QueueMode::Flush
        } else {
            QueueMode::Append
        };
        let utterance = Utterance::new(segment.as_ref(), mode);

        log::debug!("mode ({:?}): {}", mode, utterance.text);
        match engine.speak(&utterance) {
            Ok(()) => accepted += 1,
            Err(err) => log::warn!(
                "{}: utterance {} was not queued: {}",
                engine.name(),
                utterance.id,
                err
            ),
        }
    }
    accepted
}

/// Interrupt playback and clear the engine queue.
pub fn stop<E: SpeechEngine + ?Sized>(engine: &E) {
    log::debug!("stop speech");
    if let Err(err) = engine.stop() {
        log::warn!("{}: stop failed: {}", engine.name(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::memory::{EngineCall, RecordingEngine};

    fn speak_call(text: &str, mode: QueueMode) -> EngineCall {
        EngineCall::Speak {
            text: text.to_string(),
            mode,
        }
    }

    #[test]
    fn test_first_flushes_rest_append() {
        let engine = RecordingEngine::new();
        let accepted = dispatch(&engine, &["a", "b", "c"]);

        assert_eq!(accepted, 3);
        assert_eq!(
            engine.calls(),
            vec![
                speak_call("a", QueueMode::Flush),
                speak_call("b", QueueMode::Append),
                speak_call("c", QueueMode::Append),
            ]
        );
    }

    #[test]
    fn test_empty_dispatch_is_noop() {
        let engine = RecordingEngine::new();
        let segments: Vec<String> = Vec::new();
        assert_eq!(dispatch(&engine, &segments), 0);
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn test_engine_failures_are_not_surfaced() {
        let engine = RecordingEngine::new().failing_commands();
        assert_eq!(dispatch(&engine, &["a", "b"]), 0);
        stop(&engine);
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let engine = RecordingEngine::new();
        stop(&engine);
        stop(&engine);
        assert_eq!(engine.calls(), vec![EngineCall::Stop, EngineCall::Stop]);
    }
}
