use thiserror::Error;

/// Core error type shared across idmint crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A selector string is not a member of its enumerated set.
    #[error("unrecognized {selector}: '{value}'")]
    UnrecognizedSelector {
        /// Name of the selector family, e.g. `isbn format`.
        selector: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Convenience alias for results returned by idmint crates.
pub type Result<T> = std::result::Result<T, Error>;
