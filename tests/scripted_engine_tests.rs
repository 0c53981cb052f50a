// Tests for the scripted engine: playback order, stop behavior, and an
// end-to-end run through the session controller.

use std::time::Duration;

use speech_session::{
    EngineEvent, RecognitionSessionController, ScriptedEngine, ScriptedStep, SessionConfig,
    SpeechEngine, StaticPermissions,
};

fn transcription_script() -> Vec<ScriptedStep> {
    vec![
        ScriptedStep::immediate(EngineEvent::ReadyForSpeech),
        ScriptedStep::immediate(EngineEvent::BeginningOfSpeech),
        ScriptedStep::immediate(EngineEvent::VolumeLevel(5.0)),
        ScriptedStep::immediate(EngineEvent::PartialResults(vec!["hello".to_string()])),
        ScriptedStep::immediate(EngineEvent::FinalResults(vec!["hello world".to_string()])),
        ScriptedStep::immediate(EngineEvent::EndOfSpeech),
    ]
}

#[tokio::test]
async fn test_playback_delivers_events_in_order() {
    let mut engine = ScriptedEngine::new(transcription_script());
    let mut rx = engine.start(&SessionConfig::default()).await.unwrap();

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    assert_eq!(events, transcription_script().into_iter().map(|s| s.event).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_stop_halts_playback() {
    let script = vec![
        ScriptedStep::immediate(EngineEvent::ReadyForSpeech),
        // Far enough out that the test will never see it
        ScriptedStep::after(Duration::from_secs(60), EngineEvent::EndOfSpeech),
    ];

    let mut engine = ScriptedEngine::new(script);
    let mut rx = engine.start(&SessionConfig::default()).await.unwrap();

    assert_eq!(rx.recv().await, Some(EngineEvent::ReadyForSpeech));
    assert!(engine.is_active());

    engine.stop().await.unwrap();
    assert!(!engine.is_active());

    // Playback is gone, the stream closes instead of delivering the rest
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn test_restart_supersedes_previous_run() {
    let script = vec![ScriptedStep::after(
        Duration::from_secs(60),
        EngineEvent::EndOfSpeech,
    )];

    let mut engine = ScriptedEngine::new(script);
    let mut first_rx = engine.start(&SessionConfig::default()).await.unwrap();
    let mut second_rx = engine.start(&SessionConfig::default()).await.unwrap();

    assert_eq!(first_rx.recv().await, None, "First run should be abandoned");
    assert!(engine.is_active());

    engine.stop().await.unwrap();
    assert_eq!(second_rx.recv().await, None);
}

#[tokio::test]
async fn test_scripted_session_end_to_end() {
    let engine = Box::new(ScriptedEngine::new(transcription_script()));
    let session = RecognitionSessionController::new(
        engine,
        &StaticPermissions::granted(),
        SessionConfig::default(),
    );

    let mut updates = session.subscribe();
    session.start_listening().await.unwrap();

    let state = updates.recv().await.unwrap();
    assert!(state.is_listening);

    let state = updates.recv().await.unwrap();
    assert!(state.volume_changed, "First flagged volume sample");

    let state = updates.recv().await.unwrap();
    assert_eq!(state.recognized_text, "hello");
    assert!(!state.volume_changed);

    let state = updates.recv().await.unwrap();
    assert_eq!(state.recognized_text, "hello world");

    let state = updates.recv().await.unwrap();
    assert!(!state.is_listening, "End of speech returns the session to idle");
    assert_eq!(state.recognized_text, "hello world");
    assert!(state.last_error.is_none());

    session.stop_listening().await.unwrap();
}
