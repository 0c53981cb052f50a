//! Speech engine abstraction
//!
//! This module defines the seam between the session controller and whatever
//! speech-to-text engine is available:
//! - `SpeechEngine`: start/stop control surface
//! - `EngineEvent`: the engine's callback surface, delivered as messages
//! - `codes`: raw engine error codes
//! - `ScriptedEngine`: replays a configured event sequence (tests, demos)

mod backend;
mod scripted;

pub use backend::{codes, EngineEvent, SpeechEngine};
pub use scripted::{ScriptedEngine, ScriptedStep};
