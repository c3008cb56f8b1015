use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use topboard_core::{BoundedTopStore, ScoreEntry};
use topboard_persist::{JsonFileSnapshot, SnapshotStore};
use topboard_server::{ServerConfig, TopboardServer};
use tracing::debug;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Show(args) => {
            let stdout = std::io::stdout();
            cmd_show(args, &cli.format, &mut stdout.lock())
        }
    }
}

fn resolve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    debug!(?config, "resolved server configuration");
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    println!(
        "{} topboard on {} (capacity {}, data {})",
        "▶".green().bold(),
        config.bind_addr.to_string().bold(),
        config.capacity,
        config.data_file.display()
    );
    TopboardServer::open(config)
        .serve()
        .await
        .context("server error")
}

fn cmd_show(args: ShowArgs, format: &OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let snapshot = JsonFileSnapshot::new(&args.data_file);
    let saved = snapshot
        .load()
        .with_context(|| format!("failed to read {}", args.data_file.display()))?
        .unwrap_or_default();

    let mut store = BoundedTopStore::new(args.capacity);
    store.replay(saved);
    let standings = store.sorted_scores();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &standings)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_table(&standings, out)?,
    }
    Ok(())
}

fn write_table(standings: &[ScoreEntry], out: &mut impl Write) -> anyhow::Result<()> {
    if standings.is_empty() {
        writeln!(out, "Leaderboard is empty.")?;
        return Ok(());
    }
    for (rank, entry) in standings.iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:<24} {}",
            format!("#{}", rank + 1).dimmed(),
            entry.name.bold(),
            entry.score.to_string().yellow()
        )?;
    }
    Ok(())
}
