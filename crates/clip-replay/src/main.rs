//! Clip Gizmo Replay entry point

use clip_replay::{Script, ScriptError, run_script};

fn main() -> Result<(), ScriptError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clip_replay=debug,clip_gizmo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        return Err(ScriptError::Usage(
            "clip-replay <script.ron> [report.json]".to_string(),
        ));
    };
    let output_path = args.next();

    tracing::info!("Replaying {}", script_path);
    let script = Script::load(&script_path)?;
    let json = run_script(&script)?.to_json()?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, json).map_err(|e| ScriptError::Io(e.to_string()))?;
            tracing::info!("Report written to {}", path);
        }
        None => println!("{json}"),
    }

    Ok(())
}
