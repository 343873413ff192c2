use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log file written by the TUI inside the data directory
pub const LOG_FILE: &str = "tally.log";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr, for CLI subcommands
    Stderr,
    /// `<data dir>/tally.log`, so the terminal UI stays clean
    File,
}

/// Default level from `-v` / `-q` counts. `RUST_LOG` overrides it.
pub fn default_level(verbose: u8, quiet: u8) -> &'static str {
    if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init_tracing(
    target: LogTarget,
    data_dir: &Path,
    verbose: u8,
    quiet: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = default_level(verbose, quiet);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| format!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File => {
            std::fs::create_dir_all(data_dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(data_dir.join(LOG_FILE))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
