use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GITFRONT_LOG";
const DEFAULT_LOG_FILTER: &str = "error";

/// Installs the stderr subscriber. Filter comes from `GITFRONT_LOG`
/// (e.g. `GITFRONT_LOG=gitfront=debug`); a second call is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
