use anyhow::Result;
use tokio::sync::mpsc;

use crate::session::SessionConfig;

/// Raw error codes reported by the speech engine.
///
/// The numeric values mirror the engine's wire contract; anything outside
/// this table maps to an unknown error downstream.
pub mod codes {
    pub const NETWORK_TIMEOUT: i32 = 1;
    pub const NETWORK: i32 = 2;
    pub const AUDIO: i32 = 3;
    pub const SERVER: i32 = 4;
    pub const CLIENT: i32 = 5;
    pub const SPEECH_TIMEOUT: i32 = 6;
    pub const NO_MATCH: i32 = 7;
    pub const RECOGNIZER_BUSY: i32 = 8;
    pub const INSUFFICIENT_PERMISSIONS: i32 = 9;
}

/// A single callback from the speech engine, delivered as a message.
///
/// One variant per entry in the engine's listener contract. `BufferReceived`
/// and `Event` are part of the contract but carry no session-state effect.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Engine is ready to receive speech
    ReadyForSpeech,
    /// User started speaking
    BeginningOfSpeech,
    /// Volume sample (engine-defined dB-like scale)
    VolumeLevel(f32),
    /// Raw audio buffer (unused downstream)
    BufferReceived(Vec<u8>),
    /// Interim recognition candidates, best first
    PartialResults(Vec<String>),
    /// Final recognition candidates, best first
    FinalResults(Vec<String>),
    /// User stopped speaking
    EndOfSpeech,
    /// Engine-specific event kind (unused downstream)
    Event(i32),
    /// Failure report, see [`codes`]
    Error(i32),
}

/// Speech engine control surface
///
/// Implementations wrap a concrete recognizer (platform service, network
/// backend, or a scripted stand-in). `start` hands back the channel on which
/// the engine delivers its events; the engine drops the sender when the
/// session ends, closing the stream.
#[async_trait::async_trait]
pub trait SpeechEngine: Send {
    /// Start recognizing with the given session configuration
    ///
    /// Returns a channel receiver that will receive engine events
    async fn start(&mut self, config: &SessionConfig) -> Result<mpsc::Receiver<EngineEvent>>;

    /// Stop recognizing
    async fn stop(&mut self) -> Result<()>;

    /// Check if the engine is currently recognizing
    fn is_active(&self) -> bool;

    /// Get engine name for logging
    fn name(&self) -> &str;
}
