//! File-backed `tracing` setup. The game owns the terminal, so log lines never
//! go to stdout or stderr.

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` without installing anything when no log file is
/// configured. `RUST_LOG` takes precedence over `config.filter`.
pub fn init(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };

    let fallback = EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::Filter {
        filter: config.filter.clone(),
        message: e.to_string(),
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

    let log_file = File::create(path).map_err(|e| LoggingError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_means_no_subscriber() {
        let config = LoggingConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_bad_filter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("game.log")),
            filter: "canvas_connect_four=loud".to_string(),
        };
        assert!(matches!(init(&config), Err(LoggingError::Filter { .. })));
        assert!(!dir.path().join("game.log").exists());
    }

    #[test]
    fn test_unwritable_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("missing").join("game.log")),
            filter: "info".to_string(),
        };
        assert!(matches!(init(&config), Err(LoggingError::FileOpen { .. })));
    }
}
