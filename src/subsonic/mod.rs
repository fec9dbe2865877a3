//! # Subsonic Integration Module
//!
//! This module is the boundary between subcli and the remote music catalog. It
//! defines the [`CatalogClient`] trait that the song resolver is written
//! against, the [`StreamUrlBuilder`] trait used by the output formatter, and
//! [`SubsonicClient`], the implementation that talks to any
//! Subsonic-compatible server (Navidrome, Airsonic, Gonic, ...).
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (play, setup)
//!          ↓
//! SongResolver ──── CatalogClient trait
//!                         ↓
//!                  SubsonicClient (reqwest, JSON)
//!                         ↓
//!                  /rest/*.view endpoints
//! ```
//!
//! ## Authentication
//!
//! Every request carries the Subsonic token scheme: a random salt `s` and
//! `t = md5(password + salt)`, so the password itself never leaves the
//! machine. Stream URLs carry the same parameters, which lets an external
//! player fetch audio without any further handshake.
//!
//! ## API Coverage
//!
//! - `ping` - connection and credential check
//! - `getStarred2` - favourite tracks
//! - `getPlaylists`, `getPlaylist` - playlists and their entries
//! - `getAlbum`, `getArtist`, `getAlbumList2` - album and artist browsing
//! - `search3` - song, album and artist search
//! - `stream` - playback URLs (built locally, never requested)
//!
//! ## Error Types
//!
//! Transport and decoding failures surface as
//! [`Error::Connection`](crate::Error::Connection); a response whose status
//! is not `ok` surfaces as [`Error::Api`](crate::Error::Api) with the
//! server's code and message.

mod catalog;
mod client;

pub use client::SubsonicClient;

use crate::{
    error::Result,
    types::{AlbumRef, ArtistRef, PlaylistRef, Track},
};

/// Builds the playback URL for a track. Must not touch the network.
pub trait StreamUrlBuilder {
    fn stream_url(&self, track_id: &str) -> String;
}

/// Queries the song resolver needs from a music catalog.
///
/// Calls are awaited one at a time; implementations do not need to be
/// shareable across tasks.
#[allow(async_fn_in_trait)]
pub trait CatalogClient: StreamUrlBuilder {
    async fn ping(&self) -> Result<()>;

    async fn get_starred(&self) -> Result<Vec<Track>>;

    async fn get_playlists(&self) -> Result<Vec<PlaylistRef>>;

    /// Fails when no playlist has the identifier `id`.
    async fn get_playlist_tracks(&self, id: &str) -> Result<Vec<Track>>;

    async fn get_album_tracks(&self, id: &str) -> Result<Vec<Track>>;

    async fn get_artist_albums(&self, id: &str) -> Result<Vec<AlbumRef>>;

    async fn search_tracks(&self, query: &str, offset: u32) -> Result<Vec<Track>>;

    async fn search_albums(&self, query: &str, offset: u32) -> Result<Vec<AlbumRef>>;

    async fn search_artists(&self, query: &str, offset: u32) -> Result<Vec<ArtistRef>>;

    /// Lists albums ordered by `kind`, e.g. `"random"` or `"newest"`.
    async fn get_album_list(&self, kind: &str) -> Result<Vec<AlbumRef>>;
}
