//! # CLI Module
//!
//! This module provides the command implementations behind the `subcli`
//! binary. Argument parsing lives in `main.rs`; the functions here do the
//! work and return a [`Result`](crate::Result) so that `main` can decide on
//! the message and exit code in one place.
//!
//! ## Commands
//!
//! - [`play`] - Loads the profile, connects, resolves the selected tracks and
//!   prints them as plain URLs or M3U (the default command)
//! - [`setup`] - Interactive configuration of server URL and credentials
//!
//! ## Output Streams
//!
//! Only track output goes to stdout. Prompts, progress spinners and status
//! messages go to stderr, so the output can be piped straight into a player:
//!
//! ```bash
//! subcli setup                         # first-time configuration
//! subcli --shuffle | mpv --playlist=-  # random albums, shuffled
//! subcli -p "Road Trip" -m > trip.m3u  # a playlist as M3U
//! subcli -q "miles davis" -t artist    # everything by the first matching artist
//! ```

mod play;
mod setup;

pub use play::{play, run};
pub use setup::setup;
