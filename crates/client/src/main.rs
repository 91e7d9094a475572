//! Skirmish command-line client.
//!
//! Composition root: reads environment configuration, loads content tables,
//! starts one encounter on the runtime and prints its events until a side falls
//! or the user presses Ctrl-C.
//!
//! ```bash
//! COMBAT_SEED=42 cargo run -p skirmish-client -- chicken --weapon dagger
//! ```
mod cli;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::broadcast::error::RecvError;

use combat_content::{ContentBundle, ContentFactory};
use combat_runtime::{Encounter, RuntimeConfig, settle};

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let _guard = logging::setup_logging()?;

    let mut config = RuntimeConfig::from_env();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let content = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir)
            .load()
            .with_context(|| format!("loading content from {}", dir.display()))?,
        None => ContentBundle::builtin(),
    };

    tracing::info!(
        npc = %args.npc,
        seed = ?config.seed,
        tick_ms = config.tick.as_millis() as u64,
        "Starting skirmish"
    );

    let encounter = Encounter::new(config, content);
    let template = encounter.content().npcs.get(&args.npc)?.clone();
    let mut player = args.player();

    let mut handle = encounter.start(&player, &template.id)?;
    let mut events = handle.subscribe();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut interrupted = false;

    loop {
        tokio::select! {
            received = events.recv() => match received {
                Ok(event) => {
                    if let Some(line) = render::event_line(&event, &template.name) {
                        println!("{line}");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },
            signal = &mut ctrl_c, if !interrupted => {
                signal.context("listening for Ctrl-C")?;
                interrupted = true;
                tracing::info!("Interrupted, stopping encounter");
                handle.stop();
            }
        }
    }

    let report = handle.join().await?;
    let settlement = settle(&report, &mut player, &template);

    println!("{}", render::summary(&report, &settlement));

    Ok(())
}
