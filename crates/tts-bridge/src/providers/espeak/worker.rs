//! Background task that plays queued utterances one espeak-ng process at a time.
//!
//! Every job carries the generation it was queued under. Flush and stop bump
//! the generation; the worker then kills the running process and skips any
//! queued job from an older generation.

use super::ENGINE_NAME;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::{mpsc, watch};
use uuid::Uuid;

#[derive(Debug)]
pub(super) struct Job {
    pub generation: u64,
    pub utterance_id: Uuid,
    pub text: String,
    pub args: Vec<String>,
}

pub(super) async fn run(
    binary: PathBuf,
    mut jobs: mpsc::UnboundedReceiver<Job>,
    mut generation: watch::Receiver<u64>,
) {
    while let Some(job) = jobs.recv().await {
        if *generation.borrow_and_update() != job.generation {
            log::debug!("{}: dropping stale utterance {}", ENGINE_NAME, job.utterance_id);
            continue;
        }
        play(&binary, job, &mut generation).await;
    }
    log::debug!("{}: playback queue closed", ENGINE_NAME);
}

async fn play(binary: &Path, job: Job, generation: &mut watch::Receiver<u64>) {
    let mut child = match Command::new(binary)
        .args(&job.args)
        .arg("--")
        .arg(&job.text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            log::warn!(
                "{}: failed to start {}: {}",
                ENGINE_NAME,
                binary.display(),
                err
            );
            return;
        }
    };

    let interrupted = tokio::select! {
        status = child.wait() => {
            match status {
                Ok(status) if status.success() => {
                    log::debug!("{}: utterance {} done", ENGINE_NAME, job.utterance_id);
                }
                Ok(status) => {
                    log::warn!("{}: utterance {} exited with {}", ENGINE_NAME, job.utterance_id, status);
                }
                Err(err) => {
                    log::warn!("{}: utterance {} failed: {}", ENGINE_NAME, job.utterance_id, err);
                }
            }
            false
        }
        _ = generation.wait_for(|current| *current != job.generation) => true,
    };

    if interrupted {
        log::debug!("{}: interrupting utterance {}", ENGINE_NAME, job.utterance_id);
        if let Err(err) = child.kill().await {
            log::warn!("{}: failed to kill playback: {}", ENGINE_NAME, err);
        }
    }
}
