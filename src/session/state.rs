use serde::{Deserialize, Serialize};

use crate::engine::codes;

/// Immutable snapshot of a recognition session
///
/// Replaced wholesale on every change; observers receive each snapshot as-is
/// and must not mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Last transcription received (partial or final), empty initially
    pub recognized_text: String,

    /// True between a start command and a stop/end-of-speech event
    pub is_listening: bool,

    /// Last engine failure report; sticky until overwritten by a later error
    pub last_error: Option<ErrorKind>,

    /// One-shot flag, true only on the update caused by a significant
    /// volume-level change
    pub volume_changed: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            recognized_text: String::new(),
            is_listening: false,
            last_error: None,
            volume_changed: false,
        }
    }
}

/// Engine failure categories surfaced to the UI layer
///
/// Each kind carries a fixed display identifier; localization happens
/// downstream. Kinds are only ever produced from engine error codes, never
/// by the session controller itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "error_audio_error")]
    AudioError,
    #[serde(rename = "error_client")]
    ClientError,
    #[serde(rename = "error_permission")]
    PermissionError,
    #[serde(rename = "error_network")]
    NetworkError,
    #[serde(rename = "error_timeout")]
    TimeoutError,
    #[serde(rename = "error_no_match")]
    NoMatchError,
    #[serde(rename = "error_busy")]
    BusyError,
    #[serde(rename = "error_server")]
    ServerError,
    #[serde(rename = "error_unknown")]
    UnknownError,
}

impl ErrorKind {
    /// Map a raw engine error code to its kind
    ///
    /// Total mapping: both timeout codes collapse to `TimeoutError`, and any
    /// code outside the table becomes `UnknownError`.
    pub fn from_code(code: i32) -> Self {
        match code {
            codes::AUDIO => ErrorKind::AudioError,
            codes::CLIENT => ErrorKind::ClientError,
            codes::INSUFFICIENT_PERMISSIONS => ErrorKind::PermissionError,
            codes::NETWORK => ErrorKind::NetworkError,
            codes::NETWORK_TIMEOUT => ErrorKind::TimeoutError,
            codes::NO_MATCH => ErrorKind::NoMatchError,
            codes::RECOGNIZER_BUSY => ErrorKind::BusyError,
            codes::SERVER => ErrorKind::ServerError,
            codes::SPEECH_TIMEOUT => ErrorKind::TimeoutError,
            _ => ErrorKind::UnknownError,
        }
    }

    /// Fixed display identifier for the UI layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::AudioError => "error_audio_error",
            ErrorKind::ClientError => "error_client",
            ErrorKind::PermissionError => "error_permission",
            ErrorKind::NetworkError => "error_network",
            ErrorKind::TimeoutError => "error_timeout",
            ErrorKind::NoMatchError => "error_no_match",
            ErrorKind::BusyError => "error_busy",
            ErrorKind::ServerError => "error_server",
            ErrorKind::UnknownError => "error_unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
