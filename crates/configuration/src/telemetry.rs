use crate::error::ConfigError;
use crate::settings::Logging;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_FILE_PREFIX: &str = "alphalab.log";

/// Installs the global tracing subscriber described by `logging`.
///
/// `RUST_LOG` overrides the configured level. When a log directory is configured
/// the returned guard must be kept alive for as long as logs should be flushed.
/// A second call fails instead of replacing the installed subscriber.
pub fn init_tracing(logging: &Logging) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| ConfigError::Tracing(e.to_string()))?;

    let (writer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .build(directory)
                .map_err(|e| {
                    ConfigError::Tracing(format!("cannot log to '{}': {}", directory, e))
                })?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(logging.directory.is_none())
        .with_writer(writer);

    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| ConfigError::Tracing(e.to_string()))?;

    tracing::debug!(level = %logging.level, json = logging.json, "Tracing initialised.");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_without_panicking() {
        let logging = Logging::default();
        // Another test binary may already own the global subscriber, so only
        // the second call is asserted on.
        let _ = init_tracing(&logging);
        let second = init_tracing(&logging);
        assert!(matches!(second, Err(ConfigError::Tracing(_))));
    }

    #[test]
    fn test_unusable_log_directory_is_an_error() {
        // A directory cannot be created underneath a regular file.
        let file = tempfile::NamedTempFile::new().unwrap();
        let logging = Logging {
            directory: Some(file.path().join("logs").display().to_string()),
            ..Logging::default()
        };

        let err = init_tracing(&logging).unwrap_err();
        match err {
            ConfigError::Tracing(message) => assert!(message.contains("logs")),
            other => panic!("expected a tracing error, got {other:?}"),
        }
    }
}
