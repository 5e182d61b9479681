mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use flexboard_core::AppConfig;
use flexboard_domain::Filter;
use flexboard_persistence::{JsonFileSlot, TaskStore};
use flexboard_tui::App;

fn init_logging(board_mode: bool) -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FLEXBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else if !board_mode {
        // The board owns the terminal, so stderr logging only runs for
        // one-shot commands.
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

fn resolve_filter(cli_filter: Option<Filter>, config: &AppConfig) -> Filter {
    cli_filter.unwrap_or_else(|| {
        let configured = config.effective_default_filter();
        configured.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring default_filter {:?}: {}", configured, e);
            Filter::default()
        })
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.is_none())?;

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "flexboard", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let data_dir = cli.dir.unwrap_or_else(|| config.effective_data_dir());
    let filter = resolve_filter(cli.filter, &config);
    tracing::debug!("Using data directory {}", data_dir.display());

    let mut store = TaskStore::open(JsonFileSlot::new(&data_dir));

    match cli.command {
        None => {
            let mut app = App::new(store, filter, config.effective_timestamp_format());
            app.run()?;
        }
        Some(command) => {
            if let Err(e) = handlers::task::handle(&mut store, command, filter) {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}
