use env_logger::Env;

use crate::cli::Cli;

/// Default log filter for a run; `RUST_LOG` always wins.
///
/// The terminal modes keep stderr quiet so log lines do not interleave with
/// the conversation.
pub fn default_filter(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.web {
        "info"
    } else {
        "warn"
    }
}

pub fn init_logging(cli: &Cli) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(cli)))
        .format_timestamp_millis()
        .init();
}
