use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum KvBrowseError {
    /// The store path was not given or was empty
    #[error("Store path is empty, pass --db to specify the path to the store")]
    EmptyPath,

    /// The store could not be opened
    #[error("Failed to open store at {path}: {reason}")]
    Open {
        /// Path that was being opened
        path: String,
        /// Underlying storage error
        reason: String,
    },

    /// A range scan reported an error before it was exhausted
    #[error("Range scan failed: {0}")]
    Scan(String),

    /// A point lookup found no value for the key
    #[error("Key not found: {0}")]
    NotFound(String),

    /// A point lookup failed in the storage backend
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// The terminal could not be drawn to or read from
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// An error writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
