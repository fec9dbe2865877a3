//! Turns a selection mode into an ordered list of tracks.
//!
//! Each [`SelectionMode`] arm is a fixed policy:
//!
//! - `Favorites` returns the starred tracks as-is.
//! - `Playlist` tries the parameter as an id first, then falls back to a
//!   case-insensitive name (or exact id) match over all playlists.
//! - `Album` returns the album's tracks.
//! - `Artist` concatenates the tracks of every album by the artist. Albums
//!   that fail to load are reported in [`Resolution::skipped`] instead of
//!   failing the whole call.
//! - `Search` dispatches on [`SearchKind`]; album and artist searches use the
//!   first hit only.
//! - `Random` takes the first [`RANDOM_ALBUM_BATCH`] albums of the server's
//!   random list and deduplicates tracks as each album arrives.
//!
//! An empty list is a valid outcome for every arm. All requests are issued
//! one after another.

use std::{collections::HashSet, str::FromStr};

use crate::{
    config::RANDOM_ALBUM_BATCH,
    error::{Error, Result},
    subsonic::CatalogClient,
    types::{AlbumRef, SkippedAlbum, Track},
    utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Song,
    Album,
    Artist,
}

impl FromStr for SearchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "song" => Ok(SearchKind::Song),
            "album" => Ok(SearchKind::Album),
            "artist" => Ok(SearchKind::Artist),
            _ => Err(Error::InvalidSearchType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    Favorites,
    Playlist(String),
    Album(String),
    Artist(String),
    Search { query: String, kind: SearchKind },
    Random,
}

impl SelectionMode {
    /// Picks the active mode from the command-line flags.
    ///
    /// Precedence is favorites, playlist, album, artist, search, then the
    /// random default. Empty strings count as not given. The search kind is
    /// only parsed when search is the winning mode, so an invalid `--type`
    /// is ignored alongside e.g. `--favorites`.
    pub fn from_flags(
        favorites: bool,
        playlist: Option<&str>,
        album: Option<&str>,
        artist: Option<&str>,
        search: Option<&str>,
        search_type: &str,
    ) -> Result<Self> {
        let given = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);

        if favorites {
            Ok(SelectionMode::Favorites)
        } else if let Some(playlist) = given(playlist) {
            Ok(SelectionMode::Playlist(playlist))
        } else if let Some(album) = given(album) {
            Ok(SelectionMode::Album(album))
        } else if let Some(artist) = given(artist) {
            Ok(SelectionMode::Artist(artist))
        } else if let Some(query) = given(search) {
            Ok(SelectionMode::Search {
                query,
                kind: search_type.parse()?,
            })
        } else {
            Ok(SelectionMode::Random)
        }
    }
}

/// Resolved tracks plus the albums that had to be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub tracks: Vec<Track>,
    pub skipped: Vec<SkippedAlbum>,
}

impl From<Vec<Track>> for Resolution {
    fn from(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            skipped: Vec::new(),
        }
    }
}

pub struct SongResolver<'a, C> {
    client: &'a C,
}

impl<'a, C: CatalogClient> SongResolver<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub async fn resolve(&self, mode: &SelectionMode) -> Result<Resolution> {
        match mode {
            SelectionMode::Favorites => Ok(self.client.get_starred().await?.into()),
            SelectionMode::Playlist(name_or_id) => Ok(self.playlist(name_or_id).await?.into()),
            SelectionMode::Album(id) => Ok(self.client.get_album_tracks(id).await?.into()),
            SelectionMode::Artist(id) => self.artist(id).await,
            SelectionMode::Search { query, kind } => self.search(query, *kind).await,
            SelectionMode::Random => self.random().await,
        }
    }

    async fn playlist(&self, name_or_id: &str) -> Result<Vec<Track>> {
        if let Ok(tracks) = self.client.get_playlist_tracks(name_or_id).await {
            return Ok(tracks);
        }

        let wanted = name_or_id.to_lowercase();
        let playlists = self.client.get_playlists().await?;
        match playlists
            .iter()
            .find(|pl| pl.name.to_lowercase() == wanted || pl.id == name_or_id)
        {
            Some(pl) => self.client.get_playlist_tracks(&pl.id).await,
            None => Err(Error::PlaylistNotFound(name_or_id.to_string())),
        }
    }

    async fn artist(&self, id: &str) -> Result<Resolution> {
        let albums = self.client.get_artist_albums(id).await?;
        let mut resolution = self.collect_albums(&albums, false).await;
        // unlike plain concatenation, drop tracks listed on several albums
        // (compilations, re-releases)
        utils::dedupe_tracks(&mut resolution.tracks);
        Ok(resolution)
    }

    async fn search(&self, query: &str, kind: SearchKind) -> Result<Resolution> {
        match kind {
            SearchKind::Song => Ok(self.client.search_tracks(query, 0).await?.into()),
            SearchKind::Album => match self.client.search_albums(query, 0).await?.first() {
                Some(album) => Ok(self.client.get_album_tracks(&album.id).await?.into()),
                None => Ok(Resolution::default()),
            },
            SearchKind::Artist => match self.client.search_artists(query, 0).await?.first() {
                Some(artist) => self.artist(&artist.id).await,
                None => Ok(Resolution::default()),
            },
        }
    }

    async fn random(&self) -> Result<Resolution> {
        let mut albums = self.client.get_album_list("random").await?;
        albums.truncate(RANDOM_ALBUM_BATCH);
        Ok(self.collect_albums(&albums, true).await)
    }

    async fn collect_albums(&self, albums: &[AlbumRef], unique: bool) -> Resolution {
        let mut resolution = Resolution::default();
        let mut seen_ids = HashSet::new();

        for album in albums {
            match self.client.get_album_tracks(&album.id).await {
                Ok(tracks) if unique => resolution
                    .tracks
                    .extend(tracks.into_iter().filter(|t| seen_ids.insert(t.id.clone()))),
                Ok(tracks) => resolution.tracks.extend(tracks),
                Err(e) => resolution.skipped.push(SkippedAlbum {
                    id: album.id.clone(),
                    name: album.name.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        resolution
    }
}
