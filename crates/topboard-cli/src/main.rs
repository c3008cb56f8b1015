use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    commands::run_command(cli).await
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// `topboard` also covers the `topboard_server` and `topboard_persist` targets.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "topboard=debug,tower_http=debug"
    } else {
        "topboard=info,tower_http=info"
    }
}
