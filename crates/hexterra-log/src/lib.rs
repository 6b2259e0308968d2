//! Structured logging for Hexterra.
//!
//! Console output with uptime timestamps and module paths, plus an optional
//! JSON log file in debug builds. `RUST_LOG` wins over the configured level.

use std::path::Path;

use hexterra_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written inside `log_dir`.
pub const LOG_FILE: &str = "hexterra.log";

/// The filter directive to use for `config`.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global tracing subscriber.
///
/// `log` records (emitted by the config loader) are bridged into tracing.
/// When `debug_build` is set and `log_dir` is writable, events are also
/// written as JSON lines to [`LOG_FILE`].
///
/// Calling this twice is a no-op for the second call.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        let _ = subscriber.with(file_layer).try_init();
        return;
    }

    let _ = subscriber.try_init();
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert!(default_env_filter().to_string().contains("info"));
        assert_eq!(filter_directive(None), "info");
    }

    #[test]
    fn test_config_level_used() {
        let mut config = Config::default();
        config.debug.log_level = "debug,hexterra_grid=trace".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,hexterra_grid=trace");
    }

    #[test]
    fn test_blank_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_subsystem_filters_parse() {
        for directive in ["info", "warn,hexterra_grid=debug", "error", "trace"] {
            assert!(
                EnvFilter::try_new(directive).is_ok(),
                "failed to parse {directive}"
            );
        }
    }

    #[test]
    fn test_debug_build_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        init_logging(Some(&log_dir), true, None);
        assert!(log_dir.join(LOG_FILE).exists());
    }
}
