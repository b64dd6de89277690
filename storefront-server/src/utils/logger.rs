//! Logging Infrastructure
//!
//! Console output always; daily rotated files in `LOG_DIR` when configured.
//! `RUST_LOG` overrides the level from `LOG_LEVEL`.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file prefix inside `LOG_DIR`
const LOG_FILE_PREFIX: &str = "storefront-server";

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(level: &str) -> String {
    format!("storefront_server={level},http_access={level},tower_http={level},sqlx=warn")
}

/// Initialize the global subscriber
///
/// Keep the returned guard alive for the life of the process, dropping it
/// flushes and stops the file writer.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false);

    let (file_layer, guard) = match log_dir.map(Path::new) {
        Some(dir) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Cannot create log dir {}: {e}, logging to console only", dir.display());
                (None, None)
            }
        },
        None => (None, None),
    };

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter("debug"),
            "storefront_server=debug,http_access=debug,tower_http=debug,sqlx=warn"
        );
    }
}
