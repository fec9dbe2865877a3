#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap};

use subcli::{
    Error, Result,
    subsonic::{CatalogClient, StreamUrlBuilder},
    types::{AlbumRef, ArtistRef, PlaylistRef, Track},
};

pub fn track(id: &str, title: &str, artist: &str, duration: u32) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: None,
        duration,
    }
}

pub fn album(id: &str, name: &str) -> AlbumRef {
    AlbumRef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

/// In-memory catalog that records every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub starred: Vec<Track>,
    pub playlists: Vec<PlaylistRef>,
    pub playlist_tracks: HashMap<String, Vec<Track>>,
    pub album_tracks: HashMap<String, Vec<Track>>,
    pub failing_albums: Vec<String>,
    pub artist_albums: HashMap<String, Vec<AlbumRef>>,
    pub track_hits: Vec<Track>,
    pub album_hits: Vec<AlbumRef>,
    pub artist_hits: Vec<ArtistRef>,
    pub random_albums: Vec<AlbumRef>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn with_album(mut self, id: &str, tracks: Vec<Track>) -> Self {
        self.album_tracks.insert(id.to_string(), tracks);
        self
    }

    pub fn with_playlist(mut self, id: &str, name: &str, tracks: Vec<Track>) -> Self {
        self.playlists.push(PlaylistRef {
            id: id.to_string(),
            name: name.to_string(),
        });
        self.playlist_tracks.insert(id.to_string(), tracks);
        self
    }
}

impl StreamUrlBuilder for FakeCatalog {
    fn stream_url(&self, track_id: &str) -> String {
        format!("http://s/t/{track_id}")
    }
}

impl CatalogClient for FakeCatalog {
    async fn ping(&self) -> Result<()> {
        self.record("ping".to_string());
        Ok(())
    }

    async fn get_starred(&self) -> Result<Vec<Track>> {
        self.record("getStarred".to_string());
        Ok(self.starred.clone())
    }

    async fn get_playlists(&self) -> Result<Vec<PlaylistRef>> {
        self.record("getPlaylists".to_string());
        Ok(self.playlists.clone())
    }

    async fn get_playlist_tracks(&self, id: &str) -> Result<Vec<Track>> {
        self.record(format!("getPlaylist:{id}"));
        self.playlist_tracks.get(id).cloned().ok_or(Error::Api {
            code: 70,
            message: "Playlist not found".to_string(),
        })
    }

    async fn get_album_tracks(&self, id: &str) -> Result<Vec<Track>> {
        self.record(format!("getAlbum:{id}"));
        if self.failing_albums.iter().any(|a| a == id) {
            return Err(Error::Connection("timed out".to_string()));
        }
        self.album_tracks.get(id).cloned().ok_or(Error::Api {
            code: 70,
            message: "Album not found".to_string(),
        })
    }

    async fn get_artist_albums(&self, id: &str) -> Result<Vec<AlbumRef>> {
        self.record(format!("getArtist:{id}"));
        self.artist_albums.get(id).cloned().ok_or(Error::Api {
            code: 70,
            message: "Artist not found".to_string(),
        })
    }

    async fn search_tracks(&self, query: &str, offset: u32) -> Result<Vec<Track>> {
        self.record(format!("searchTracks:{query}:{offset}"));
        Ok(self.track_hits.clone())
    }

    async fn search_albums(&self, query: &str, offset: u32) -> Result<Vec<AlbumRef>> {
        self.record(format!("searchAlbums:{query}:{offset}"));
        Ok(self.album_hits.clone())
    }

    async fn search_artists(&self, query: &str, offset: u32) -> Result<Vec<ArtistRef>> {
        self.record(format!("searchArtists:{query}:{offset}"));
        Ok(self.artist_hits.clone())
    }

    async fn get_album_list(&self, kind: &str) -> Result<Vec<AlbumRef>> {
        self.record(format!("getAlbumList:{kind}"));
        Ok(self.random_albums.clone())
    }
}
