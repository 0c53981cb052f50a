use anyhow::Result;
use serde::Deserialize;

use crate::session::{LanguageModel, SessionConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub recognizer: RecognizerConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RecognizerConfig {
    pub locale: String,
    pub partial_results: bool,
    pub volume_threshold: f32,
    pub volume_delta: f32,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Session configuration carrying the recognizer settings from file
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            locale: self.recognizer.locale.clone(),
            language_model: LanguageModel::FreeForm,
            partial_results: self.recognizer.partial_results,
            calling_package: self.service.name.clone(),
            volume_threshold: self.recognizer.volume_threshold,
            volume_delta: self.recognizer.volume_delta,
            ..SessionConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let session = SessionConfig::default();

        Self {
            service: ServiceConfig {
                name: "speech-session".to_string(),
            },
            recognizer: RecognizerConfig {
                locale: session.locale,
                partial_results: session.partial_results,
                volume_threshold: session.volume_threshold,
                volume_delta: session.volume_delta,
            },
        }
    }
}
