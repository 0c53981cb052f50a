//! Recognition session management
//!
//! This module provides the `RecognitionSessionController` abstraction that
//! manages:
//! - Engine start/stop lifecycle
//! - Translation of engine events into state transitions
//! - Publication of immutable state snapshots to observers
//! - Error-code mapping to display identifiers
//! - Session diagnostics

mod config;
mod controller;
mod state;
mod stats;

pub use config::{LanguageModel, SessionConfig};
pub use controller::RecognitionSessionController;
pub use state::{ErrorKind, SessionState};
pub use stats::SessionStats;
