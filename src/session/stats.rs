use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Diagnostics about a recognition session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether the session is currently listening
    pub is_listening: bool,

    /// When the controller was created
    pub started_at: DateTime<Utc>,

    /// Number of state snapshots published so far
    pub updates_published: usize,

    /// Number of engine failure reports observed
    pub errors_seen: usize,
}
