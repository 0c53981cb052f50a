use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use speech_session::{
    Config, EngineEvent, RecognitionSessionController, ScriptedEngine, ScriptedStep,
    StaticPermissions,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "speech-session", about = "Runs a scripted recognition session")]
struct Args {
    /// Config file path (TOML), falls back to built-in defaults
    #[arg(short, long)]
    config: Option<String>,

    /// Override the recognizer locale
    #[arg(long)]
    locale: Option<String>,
}

/// Event sequence a short dictation would produce
fn demo_script() -> Vec<ScriptedStep> {
    let step = Duration::from_millis(200);

    vec![
        ScriptedStep::immediate(EngineEvent::ReadyForSpeech),
        ScriptedStep::after(step, EngineEvent::BeginningOfSpeech),
        ScriptedStep::after(step, EngineEvent::VolumeLevel(5.0)),
        ScriptedStep::after(step, EngineEvent::PartialResults(vec!["hello".to_string()])),
        ScriptedStep::after(step, EngineEvent::VolumeLevel(8.0)),
        ScriptedStep::after(
            step,
            EngineEvent::PartialResults(vec!["hello world".to_string()]),
        ),
        ScriptedStep::after(
            step,
            EngineEvent::FinalResults(vec!["hello world, this is a demo".to_string()]),
        ),
        ScriptedStep::after(step, EngineEvent::EndOfSpeech),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut session_config = cfg.session_config();
    if let Some(locale) = args.locale {
        session_config.locale = locale;
    }

    info!("speech-session v0.1.0");
    info!("Session: {} ({})", session_config.session_id, session_config.locale);

    let engine = Box::new(ScriptedEngine::new(demo_script()));
    let controller =
        RecognitionSessionController::new(engine, &StaticPermissions::granted(), session_config);

    let mut updates = controller.subscribe();
    controller.start_listening().await?;

    while let Ok(state) = updates.recv().await {
        info!(
            "state: text={:?} listening={} error={:?} volume_changed={}",
            state.recognized_text, state.is_listening, state.last_error, state.volume_changed
        );

        // End of speech brings the session back to idle
        if !state.is_listening {
            break;
        }
    }

    controller.stop_listening().await?;

    let stats = controller.stats();
    info!(
        "Session finished: {} updates published, {} errors",
        stats.updates_published, stats.errors_seen
    );

    Ok(())
}
