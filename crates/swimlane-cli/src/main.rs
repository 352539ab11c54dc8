mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use swimlane_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SWIMLANE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let pretty = cli.pretty || config.pretty_output;

    match cli.command {
        Commands::Validate { board } => handlers::board::handle_validate(&board, pretty),
        Commands::Replay(args) => handlers::replay::handle(args, &config, pretty),
        Commands::ReorderColumn(args) => handlers::column::handle_reorder(args, pretty),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "swimlane",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Failed to open debug log: {}", e);
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        output::output_error(&format!("{:#}", e));
    }
}
