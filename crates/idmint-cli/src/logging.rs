use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "IDMINT_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("logging error: {0}")]
    Init(String),
}

/// Install the global subscriber.
///
/// Without a log file, events go to stderr in the human-readable format.
/// With one, events are appended to it as JSON lines.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let filter = build_filter(verbosity, std::env::var(LOG_ENV).ok().as_deref());

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(Mutex::new(file));
            let make_writer = BoxMakeWriter::new(move || SharedWriter {
                file: Arc::clone(&file),
            });

            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(make_writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        None => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    result.map_err(|err| LoggingError::Init(err.to_string()))
}

fn build_filter(verbosity: u8, env: Option<&str>) -> EnvFilter {
    EnvFilter::try_new(filter_directive(verbosity, env))
        .unwrap_or_else(|_| EnvFilter::new(level_for(0)))
}

/// `-v` flags win over the environment; an empty environment value counts
/// as unset.
fn filter_directive(verbosity: u8, env: Option<&str>) -> String {
    if verbosity > 0 {
        return level_for(verbosity).to_string();
    }
    env.map(str::trim)
        .filter(|directive| !directive.is_empty())
        .unwrap_or(level_for(0))
        .to_string()
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

struct SharedWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.flush()
    }
}
