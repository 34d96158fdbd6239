//! Stderr logging for the command-line tool

use tracing::Level;

/// Map the number of `-v` flags to the most verbose level shown
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a formatting subscriber on stderr. Records emitted through the
/// `log` facade are forwarded to it. Fails if a global subscriber or logger
/// is already installed.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .without_time()
        .try_init()
}
