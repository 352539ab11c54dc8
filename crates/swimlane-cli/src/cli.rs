use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "swimlane")]
#[command(about = "Resolve kanban drag gestures into move intents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a board file and print its ordered columns
    Validate {
        /// Path to board JSON (or set SWIMLANE_FILE env var)
        #[arg(value_name = "BOARD", env = "SWIMLANE_FILE")]
        board: PathBuf,
    },
    /// Replay a gesture script against a board
    Replay(ReplayArgs),
    /// Move a column to a new index
    ReorderColumn(ReorderColumnArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Path to board JSON
    #[arg(value_name = "BOARD")]
    pub board: PathBuf,
    /// Path to a JSON array of gesture events
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
    /// Apply each committed intent before the next gesture
    #[arg(long)]
    pub apply: bool,
    /// Write the resulting board here (implies --apply)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
    /// Ignore every gesture, as a disabled board would
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Args)]
pub struct ReorderColumnArgs {
    /// Path to board JSON (or set SWIMLANE_FILE env var)
    #[arg(value_name = "BOARD", env = "SWIMLANE_FILE")]
    pub board: PathBuf,
    #[arg(long)]
    pub column: Uuid,
    #[arg(long)]
    pub to: usize,
    /// Save the reordered board back to BOARD
    #[arg(long)]
    pub write: bool,
}
