mod atomic;
mod settings;

pub use atomic::write_bytes_atomic;
pub use settings::{OutputFormat, load_settings};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error in {path}: {source}")]
    TomlDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config file not found: {0}")]
    MissingConfig(PathBuf),
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
