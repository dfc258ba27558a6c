use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides `-v`.
const LOG_ENV: &str = "LINTPARITY_LOG";

/// Send logs to stderr so stdout carries only the report.
pub(crate) fn init(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
