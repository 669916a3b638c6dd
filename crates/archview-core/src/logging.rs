//! File logging for the TUI process.
//!
//! The terminal belongs to the UI, so events go to a daily-rotated file under
//! the platform data dir. `ARCHVIEW_LOG` takes `EnvFilter` directives:
//!
//! ```bash
//! ARCHVIEW_LOG=debug archview
//! ARCHVIEW_LOG=archview_app=trace archview
//! ```

use std::path::PathBuf;

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::error::Result;

const LOG_ENV_VAR: &str = "ARCHVIEW_LOG";
const LOG_FILE_PREFIX: &str = "archview.log";
const DEFAULT_FILTER: &str = "archview=info,warn";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Where log files go and which events are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub filter: String,
}

impl LogConfig {
    /// Platform log directory, with `ARCHVIEW_LOG` overriding the filter.
    pub fn from_env() -> Self {
        Self::with_filter(std::env::var(LOG_ENV_VAR).ok())
    }

    fn with_filter(filter: Option<String>) -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            directory: base.join("archview").join("logs"),
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }

    /// A malformed `ARCHVIEW_LOG` falls back to the default filter rather
    /// than keeping the app from starting.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(config: &LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)?;
    let appender = tracing_appender::rolling::daily(&config.directory, LOG_FILE_PREFIX);

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(file_layer)
        .init();

    tracing::debug!(
        directory = %config.directory.display(),
        filter = %config.filter,
        "File logging enabled"
    );
    Ok(())
}
