//! subcli library
//!
//! This library turns a user's library on a Subsonic-compatible server into a
//! list of stream URLs for an external player such as mpv. It includes modules
//! for credential storage, configuration, the catalog client, song resolution
//! and output rendering.
//!
//! # Modules
//!
//! - `cli` - Command implementations (`play`, `setup`)
//! - `config` - Config file location and protocol constants
//! - `crypto` - Encryption of the stored server password
//! - `error` - Crate-wide error type
//! - `management` - Loading and persisting the connection profile
//! - `output` - Plain and M3U output
//! - `resolver` - Selection modes and song resolution
//! - `subsonic` - Catalog client trait and Subsonic implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Deduplication, limit, shuffle and other helpers
//!
//! # Example
//!
//! ```
//! use subcli::{config, management::ProfileManager};
//!
//! #[tokio::main]
//! async fn main() -> subcli::Result<()> {
//!     let manager = ProfileManager::load(config::config_path()).await?;
//!     let credentials = manager.credentials()?;
//!     // Build a SubsonicClient from the credentials...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod management;
pub mod output;
pub mod resolver;
pub mod subsonic;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point to stderr.
///
/// # Example
///
/// ```
/// info!("Testing connection...");
/// info!("Config location: {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark to stderr.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only use it
/// for failures that end the invocation.
///
/// # Example
///
/// ```
/// error!("Error loading config: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for recoverable problems, such as an album that could not be loaded
/// while the rest of the tracks are still played.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
