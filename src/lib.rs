pub mod config;
pub mod engine;
pub mod permission;
pub mod session;

pub use config::Config;
pub use engine::{codes, EngineEvent, ScriptedEngine, ScriptedStep, SpeechEngine};
pub use permission::{PermissionProbe, StaticPermissions};
pub use session::{
    ErrorKind, LanguageModel, RecognitionSessionController, SessionConfig, SessionState,
    SessionStats,
};
