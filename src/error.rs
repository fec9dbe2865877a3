//! Error type shared by every layer of subcli.
//!
//! Configuration, credential and catalog failures are all represented by a
//! single [`Error`] enum so the CLI can decide in one place which failures are
//! fatal, which deserve a "run setup" hint and which are simply "nothing to do".

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("could not decode config: {0}")]
    ConfigCorrupt(String),

    #[error("could not decrypt password: {0}")]
    Decryption(String),

    #[error("could not encrypt password")]
    Encryption,

    #[error("configuration is incomplete: {0} is missing")]
    MissingCredentials(&'static str),

    #[error("connection to server failed: {0}")]
    Connection(String),

    #[error("server returned error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("playlist not found: {0}")]
    PlaylistNotFound(String),

    #[error("invalid search type: {0} (use song, album, or artist)")]
    InvalidSearchType(String),

    #[error("no songs found")]
    NoResults,

    #[error("{0}")]
    Setup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the user can fix the failure by running `subcli setup`.
    pub fn needs_setup(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound(_) | Error::MissingCredentials(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Connection(err.to_string())
    }
}
