use serde::{Deserialize, Serialize};

/// Recognition model requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageModel {
    /// Free-form dictation
    FreeForm,
    /// Short search-style phrases
    WebSearch,
}

/// Configuration for a recognition session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "session-2025-11-03-dictation")
    pub session_id: String,

    /// BCP-47 locale tag passed to the engine
    pub locale: String,

    /// Recognition model requested from the engine
    pub language_model: LanguageModel,

    /// Whether the engine should deliver interim results
    pub partial_results: bool,

    /// Caller identity reported to the engine
    pub calling_package: String,

    /// Absolute volume level a sample must exceed to count as a
    /// significant change (engine-defined scale)
    pub volume_threshold: f32,

    /// Minimum difference from the previously flagged sample
    pub volume_delta: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("session-{}", uuid::Uuid::new_v4()),
            locale: "sv-SE".to_string(),
            language_model: LanguageModel::FreeForm,
            partial_results: true,
            calling_package: "speech-session".to_string(),
            volume_threshold: 4.0,
            volume_delta: 1.0,
        }
    }
}
