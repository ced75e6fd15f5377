use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Keeps demo stdout free of log lines.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr `fmt` subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::warn!("logging initialised twice");
    }
}
