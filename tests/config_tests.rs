// Tests for file-backed configuration loading.

use std::io::Write;

use speech_session::{Config, LanguageModel};

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("speech-session.toml");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[service]
name = "dictation-demo"

[recognizer]
locale = "en-US"
partial_results = false
volume_threshold = 6.0
volume_delta = 2.0
"#
    )
    .unwrap();

    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.name, "dictation-demo");
    assert_eq!(cfg.recognizer.locale, "en-US");
    assert!(!cfg.recognizer.partial_results);
    assert_eq!(cfg.recognizer.volume_threshold, 6.0);
    assert_eq!(cfg.recognizer.volume_delta, 2.0);
}

#[test]
fn test_load_missing_file_fails() {
    assert!(Config::load("/nonexistent/speech-session.toml").is_err());
}

#[test]
fn test_default_config_matches_session_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.service.name, "speech-session");
    assert_eq!(cfg.recognizer.locale, "sv-SE");
    assert!(cfg.recognizer.partial_results);
    assert_eq!(cfg.recognizer.volume_threshold, 4.0);
    assert_eq!(cfg.recognizer.volume_delta, 1.0);
}

#[test]
fn test_session_config_carries_file_settings() {
    let cfg = Config::default();
    let session = cfg.session_config();

    assert_eq!(session.locale, cfg.recognizer.locale);
    assert_eq!(session.language_model, LanguageModel::FreeForm);
    assert_eq!(session.calling_package, cfg.service.name);
    assert_eq!(session.partial_results, cfg.recognizer.partial_results);
    assert_eq!(session.volume_threshold, cfg.recognizer.volume_threshold);
}
