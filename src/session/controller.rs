use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::config::SessionConfig;
use super::state::{ErrorKind, SessionState};
use super::stats::SessionStats;
use crate::engine::{EngineEvent, SpeechEngine};
use crate::permission::PermissionProbe;

/// Broadcast capacity for state snapshots; observers lagging behind this
/// many updates miss the oldest ones rather than blocking the session.
const STATE_CHANNEL_CAPACITY: usize = 256;

/// Mutable session data behind the single-writer lock
struct SessionInner {
    state: SessionState,
    previous_volume_level: f32,
    updates_published: usize,
    errors_seen: usize,
}

/// Single source of truth for one recognition session
///
/// Owns the engine lifecycle, applies engine events to an immutable
/// [`SessionState`] snapshot, and publishes every new snapshot to
/// subscribers in the order the changes occurred. The only component with
/// mutation rights over the session state.
///
/// Cloning is cheap and yields a handle to the same session.
#[derive(Clone)]
pub struct RecognitionSessionController {
    config: SessionConfig,

    /// The wrapped recognizer
    engine: Arc<tokio::sync::Mutex<Box<dyn SpeechEngine>>>,

    /// Session state, previous volume sample, and counters; every mutation
    /// and its matching broadcast happen under this lock
    inner: Arc<Mutex<SessionInner>>,

    /// Snapshot fan-out to observers
    updates: broadcast::Sender<SessionState>,

    /// Handle for the engine event pump task
    pump_task: Arc<tokio::sync::Mutex<Option<JoinHandle<()>>>>,

    /// Captured once at construction; not re-checked
    microphone_permission_granted: bool,

    /// When this controller was created
    started_at: DateTime<Utc>,
}

impl RecognitionSessionController {
    /// Create a controller around the given engine
    ///
    /// Queries the permission probe exactly once; the initial state is
    /// empty text, not listening, no error.
    pub fn new(
        engine: Box<dyn SpeechEngine>,
        permissions: &dyn PermissionProbe,
        config: SessionConfig,
    ) -> Self {
        info!(
            "Creating recognition session: {} (engine: {})",
            config.session_id,
            engine.name()
        );

        let (updates, _) = broadcast::channel(STATE_CHANNEL_CAPACITY);

        Self {
            config,
            engine: Arc::new(tokio::sync::Mutex::new(engine)),
            inner: Arc::new(Mutex::new(SessionInner {
                state: SessionState::default(),
                previous_volume_level: 0.0,
                updates_published: 0,
                errors_seen: 0,
            })),
            updates,
            pump_task: Arc::new(tokio::sync::Mutex::new(None)),
            microphone_permission_granted: permissions.microphone_access_granted(),
            started_at: Utc::now(),
        }
    }

    /// Get the current state snapshot
    pub fn current(&self) -> SessionState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Subscribe to state snapshots
    ///
    /// The receiver yields every snapshot published after this call, in
    /// publication order. Pair with [`current`](Self::current) for the
    /// value at subscription time.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionState> {
        self.updates.subscribe()
    }

    /// Whether a start command is in effect without a later stop/end
    pub fn is_listening(&self) -> bool {
        self.inner.lock().unwrap().state.is_listening
    }

    /// Microphone permission flag captured at construction
    pub fn microphone_permission_granted(&self) -> bool {
        self.microphone_permission_granted
    }

    /// Get current session diagnostics
    pub fn stats(&self) -> SessionStats {
        let inner = self.inner.lock().unwrap();

        SessionStats {
            is_listening: inner.state.is_listening,
            started_at: self.started_at,
            updates_published: inner.updates_published,
            errors_seen: inner.errors_seen,
        }
    }

    /// Start listening
    ///
    /// Issues the start command to the engine, spawns the event pump, and
    /// immediately publishes a listening state. Does not wait for the
    /// engine to become ready; readiness and failures arrive later as
    /// engine events. May be called again at any time, superseding the
    /// previous run.
    pub async fn start_listening(&self) -> Result<()> {
        if !self.microphone_permission_granted {
            warn!("Starting without microphone permission; expect a permission error from the engine");
        }

        let event_rx = {
            let mut engine = self.engine.lock().await;
            engine
                .start(&self.config)
                .await
                .context("Failed to start speech engine")?
        };

        // The listening snapshot must go out before any engine event can be
        // applied; events buffer in the channel until the pump starts
        self.notify_listening(true);

        let pump = self.spawn_event_pump(event_rx);
        {
            let mut task = self.pump_task.lock().await;
            // A superseded pump drains on its own once the engine drops
            // the old sender
            *task = Some(pump);
        }

        Ok(())
    }

    /// Stop listening
    ///
    /// Issues the stop command and immediately publishes a non-listening
    /// state, without waiting for the engine's end-of-speech event.
    pub async fn stop_listening(&self) -> Result<()> {
        {
            let mut engine = self.engine.lock().await;
            engine.stop().await.context("Failed to stop speech engine")?;
        }

        self.notify_listening(false);

        Ok(())
    }

    /// Apply one engine event to the session state
    ///
    /// Normally driven by the event pump, but callable directly when the
    /// engine is wired to the controller some other way. Events must be
    /// applied serially.
    pub fn apply_event(&self, event: EngineEvent) {
        match event {
            EngineEvent::VolumeLevel(level) => self.on_volume_level(level),
            EngineEvent::PartialResults(texts) => self.on_partial_results(texts),
            EngineEvent::FinalResults(texts) => self.on_final_results(texts),
            EngineEvent::EndOfSpeech => self.on_end_of_speech(),
            EngineEvent::Error(code) => self.on_error(code),
            EngineEvent::ReadyForSpeech => self.on_ready_for_speech(),
            EngineEvent::BeginningOfSpeech => self.on_beginning_of_speech(),
            EngineEvent::BufferReceived(buffer) => self.on_buffer_received(buffer),
            EngineEvent::Event(kind) => self.on_event(kind),
        }
    }

    /// Volume sample from the engine
    ///
    /// Publishes a snapshot with `volume_changed = true` only when the
    /// sample clears the absolute threshold and differs from the previous
    /// flagged sample by more than the configured delta. Non-qualifying
    /// samples publish nothing.
    pub fn on_volume_level(&self, level: f32) {
        let mut inner = self.inner.lock().unwrap();

        let significant = level > self.config.volume_threshold
            && (level - inner.previous_volume_level).abs() > self.config.volume_delta;

        if significant {
            inner.previous_volume_level = level;
            let next = SessionState {
                volume_changed: true,
                ..inner.state.clone()
            };
            self.store_and_publish(&mut inner, next);
        }
    }

    /// Interim recognition candidates
    pub fn on_partial_results(&self, candidate_texts: Vec<String>) {
        self.update_results(candidate_texts);
    }

    /// Final recognition candidates
    ///
    /// Handled identically to partial results; only arrival timing differs.
    pub fn on_final_results(&self, candidate_texts: Vec<String>) {
        self.update_results(candidate_texts);
    }

    /// Engine reports the user stopped speaking
    pub fn on_end_of_speech(&self) {
        self.notify_listening(false);
    }

    /// Engine failure report
    ///
    /// Maps the code to an [`ErrorKind`] and publishes it as `last_error`.
    /// The listening flag is left untouched, and the error stays set until
    /// a later error overwrites it.
    pub fn on_error(&self, code: i32) {
        let kind = ErrorKind::from_code(code);
        warn!("Engine error {}: {}", code, kind);

        let mut inner = self.inner.lock().unwrap();
        inner.errors_seen += 1;
        let next = SessionState {
            last_error: Some(kind),
            volume_changed: false,
            ..inner.state.clone()
        };
        self.store_and_publish(&mut inner, next);
    }

    /// Engine is ready for speech; no state effect
    pub fn on_ready_for_speech(&self) {}

    /// User started speaking; no state effect
    pub fn on_beginning_of_speech(&self) {}

    /// Raw audio buffer; no state effect
    pub fn on_buffer_received(&self, _buffer: Vec<u8>) {}

    /// Engine-specific event; no state effect
    pub fn on_event(&self, _kind: i32) {}

    fn spawn_event_pump(&self, mut event_rx: mpsc::Receiver<EngineEvent>) -> JoinHandle<()> {
        let controller = self.clone();

        tokio::spawn(async move {
            debug!("Engine event pump started");

            while let Some(event) = event_rx.recv().await {
                controller.apply_event(event);
            }

            debug!("Engine event pump stopped");
        })
    }

    fn notify_listening(&self, is_listening: bool) {
        let mut inner = self.inner.lock().unwrap();
        let next = SessionState {
            is_listening,
            volume_changed: false,
            ..inner.state.clone()
        };
        self.store_and_publish(&mut inner, next);
    }

    fn update_results(&self, candidate_texts: Vec<String>) {
        let recognized_text = candidate_texts.into_iter().next().unwrap_or_default();

        let mut inner = self.inner.lock().unwrap();
        let next = SessionState {
            recognized_text,
            volume_changed: false,
            ..inner.state.clone()
        };
        self.store_and_publish(&mut inner, next);
    }

    /// Store the new snapshot and fan it out while still holding the lock,
    /// so observers see snapshots in mutation order
    fn store_and_publish(&self, inner: &mut SessionInner, next: SessionState) {
        inner.state = next.clone();
        inner.updates_published += 1;

        // A send error only means nobody is subscribed right now
        let _ = self.updates.send(next);
    }
}
