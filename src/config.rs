//! Static configuration for subcli.
//!
//! Holds the locations and protocol constants the rest of the crate reads.
//! Connection settings themselves live in the user's config file and are
//! handled by [`crate::management::ProfileManager`].
//!
//! The config file location follows this order:
//! 1. The `SUBCLI_CONFIG` environment variable (highest priority)
//! 2. `~/.config/subcli/config.yaml`
//! 3. `./subcli/config.yaml` when no home directory can be determined

use std::{env, path::PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SUBCLI_CONFIG";

/// Subsonic REST API version announced on every request.
pub const API_VERSION: &str = "1.16.1";

/// Client name announced on every request.
pub const CLIENT_NAME: &str = "subcli";

/// Number of albums taken from the server's random album list.
pub const RANDOM_ALBUM_BATCH: usize = 10;

/// Default `--limit` when the flag is not given.
pub const DEFAULT_LIMIT: i64 = 50;

/// Returns the path of the settings file.
///
/// # Example
///
/// ```
/// let path = subcli::config::config_path(); // e.g. "/home/me/.config/subcli/config.yaml"
/// ```
pub fn config_path() -> PathBuf {
    if let Some(custom) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(custom);
    }

    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".config/subcli/config.yaml");
    path
}
