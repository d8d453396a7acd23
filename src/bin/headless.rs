//! Headless runner: command names on stdin, JSON lines on stdout.
//!
//! ```text
//! $ printf 'play\nhardDrop\nquit\n' | blockfall-headless
//! {"type":"observation","seq":1,"state":"idle",...}
//! {"type":"observation","seq":2,"state":"running",...}
//! ...
//! ```
//!
//! Input ends at `quit` or end of file. Logs go to stderr.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use blockfall::core::EngineConfig;
use blockfall::logging;
use blockfall::runtime::{spawn_game, Encoder};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_stderr()?;
    let config = EngineConfig::from_env();
    info!(tick = ?config.tick_interval, "starting headless front-end");

    let game = spawn_game(config);
    let handle = game.handle.clone();
    let mut events = game.events;

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        let mut encoder = Encoder::new();
        while let Some(event) = events.recv().await {
            let mut line = encoder.encode_line(&event)?;
            line.push('\n');
            stdout.write_all(line.as_bytes()).await?;
            stdout.flush().await?;
        }
        anyhow::Ok(encoder.seq())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        handle.send_text(line).await?;
    }

    handle.shutdown().await?;
    let summary = game.task.await.context("game actor panicked")?;
    // The actor dropped its event sinks on exit, so the writer drains and ends.
    drop(handle);
    let written = writer.await.context("writer task panicked")??;
    debug!(written, "output closed");
    info!(
        state = summary.state.as_str(),
        lines = summary.lines,
        "headless session finished"
    );
    Ok(())
}
