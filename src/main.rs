use clap::Parser;
use tally::cli::commands::Cli;
use tally::cli::handlers;
use tally::io::config_io::{load_config, resolve_data_dir};
use tally::logging::{LogTarget, init_tracing};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &config)?;

    // The TUI owns the terminal, so its logs go to a file
    let target = if cli.command.is_none() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    init_tracing(target, &data_dir, cli.verbose, cli.quiet)?;

    let mut session = handlers::open_session(&data_dir)?;
    match cli.command {
        // No subcommand → launch TUI
        None => tally::tui::run(session, config.ui),
        Some(command) => handlers::dispatch(command, cli.json, &mut session),
    }
}
