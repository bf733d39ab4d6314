use std::io;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used.
pub fn init_logger(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // try_init so a second call (tests, embedding) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr) // Keep stdout for command output
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init();
}

/// Log an info message with a short prefix
pub fn log_info(prefix: &str, message: impl std::fmt::Display) {
    info!("{} {}", prefix, message);
}

/// Log a warning message with a short prefix
pub fn log_warn(prefix: &str, message: impl std::fmt::Display) {
    warn!("{} {}", prefix, message);
}

/// Log an error message with a short prefix
pub fn log_error(prefix: &str, message: impl std::fmt::Display) {
    error!("{} {}", prefix, message);
}

/// Log a debug message
pub fn log_debug(message: impl std::fmt::Display) {
    debug!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger("warn");
        init_logger("debug");
        log_debug("still fine");
    }
}
