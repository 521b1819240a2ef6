//! File-based logging initialization

use std::fs;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::StorefrontConfig;

/// Initialize the logging system
///
/// - Daily-rotated `storefront.log` in the configured log directory
/// - Compact stderr output for interactive runs
/// - Non-blocking file writes
/// - Panic hook that logs the panic location and message
///
/// The returned guard flushes the file writer when dropped; keep it alive for
/// the lifetime of the program. Returns `None` when the log directory cannot
/// be created, in which case only stderr logging is installed.
pub fn init(config: &StorefrontConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("storefront=info,warn"));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer())
            .try_init();
        setup_panic_hook();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "storefront.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    // try_init: tests and embedders may already have a global subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer())
        .try_init();

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        api = %config.api_base_url,
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Compact stderr output; generic so it stacks on either subscriber.
fn stderr_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer().with_writer(std::io::stderr).with_target(false).compact()
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_file_and_fallback_to_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            log_dir: dir.path().join("logs"),
            ..StorefrontConfig::default()
        };
        let guard = init(&config);
        assert!(guard.is_some());
        assert!(config.log_dir.is_dir());

        // A regular file where the directory should be forces the stderr-only stack
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();
        let config = StorefrontConfig {
            log_dir: blocker.join("logs"),
            ..StorefrontConfig::default()
        };
        assert!(init(&config).is_none());
    }
}
