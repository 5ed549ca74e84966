use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise logging to stderr.
///
/// `directive` comes from the settings file (e.g. `"info"` or
/// `"tabstash=debug"`). `RUST_LOG`, when set, takes precedence.
pub fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(crate::model::constants::DEFAULT_LOG_LEVEL));

    // A second call (tests, or a re-init) leaves the first subscriber in place.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging("debug");
        init_logging("not a [valid directive");
    }
}
