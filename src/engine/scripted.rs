use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::backend::{EngineEvent, SpeechEngine};
use crate::session::SessionConfig;

/// One step of a scripted recognition run
#[derive(Debug, Clone)]
pub struct ScriptedStep {
    /// Delay before the event is delivered
    pub delay: Duration,
    /// Event to deliver
    pub event: EngineEvent,
}

impl ScriptedStep {
    /// Step delivered immediately (no delay)
    pub fn immediate(event: EngineEvent) -> Self {
        Self {
            delay: Duration::ZERO,
            event,
        }
    }

    /// Step delivered after the given delay
    pub fn after(delay: Duration, event: EngineEvent) -> Self {
        Self { delay, event }
    }
}

/// Speech engine that replays a configured event sequence
///
/// Stands in for a real recognizer in tests and demos: each `start` spawns a
/// playback task that delivers the script's events in order, honoring the
/// per-step delays. `stop` halts playback; undelivered steps are discarded.
pub struct ScriptedEngine {
    script: Vec<ScriptedStep>,
    active: Arc<AtomicBool>,
    playback_task: Option<JoinHandle<()>>,
}

impl ScriptedEngine {
    pub fn new(script: Vec<ScriptedStep>) -> Self {
        Self {
            script,
            active: Arc::new(AtomicBool::new(false)),
            playback_task: None,
        }
    }

    /// Engine with no events to deliver; useful when only the control
    /// surface matters
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl SpeechEngine for ScriptedEngine {
    async fn start(&mut self, config: &SessionConfig) -> Result<mpsc::Receiver<EngineEvent>> {
        // A restart supersedes any playback still in flight
        self.active.store(false, Ordering::SeqCst);
        if let Some(task) = self.playback_task.take() {
            task.abort();
        }

        info!(
            "Starting scripted engine: locale={}, partial_results={}, {} steps",
            config.locale,
            config.partial_results,
            self.script.len()
        );

        self.active.store(true, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel(32);
        let script = self.script.clone();
        let active = Arc::clone(&self.active);

        self.playback_task = Some(tokio::spawn(async move {
            for step in script {
                if !active.load(Ordering::SeqCst) {
                    break;
                }

                if !step.delay.is_zero() {
                    tokio::time::sleep(step.delay).await;
                }

                if !active.load(Ordering::SeqCst) {
                    break;
                }

                if tx.send(step.event).await.is_err() {
                    // Receiver gone, nobody is listening anymore
                    break;
                }
            }

            debug!("Scripted playback finished");
        }));

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.active.store(false, Ordering::SeqCst);

        if let Some(task) = self.playback_task.take() {
            task.abort();
        }

        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
