use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use topboard_core::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(
    name = "topboard",
    about = "Bounded top-N leaderboard served over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the leaderboard server
    Serve(ServeArgs),
    /// Print the standings stored in a snapshot file
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long)]
    pub data_file: Option<PathBuf>,
    #[arg(long)]
    pub capacity: Option<NonZeroUsize>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(long, default_value = "scores.json")]
    pub data_file: PathBuf,
    /// Board size to replay the snapshot into
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: NonZeroUsize,
}
