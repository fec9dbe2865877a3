use serde::{Deserialize, Deserializer};

/// Validated connection settings handed to the catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(default = "unknown_title")]
    pub title: String,
    #[serde(default = "unknown_artist")]
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    /// Length in whole seconds.
    #[serde(default)]
    pub duration: u32,
}

fn unknown_title() -> String {
    "Unknown Title".to_string()
}

fn unknown_artist() -> String {
    "Unknown Artist".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlbumRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// An album whose tracks could not be fetched during aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAlbum {
    pub id: String,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct SubsonicEnvelope {
    #[serde(rename = "subsonic-response")]
    pub response: SubsonicResponse,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsonicResponse {
    pub status: String,
    pub error: Option<SubsonicError>,
    pub starred2: Option<SongList>,
    pub playlists: Option<PlaylistList>,
    pub playlist: Option<PlaylistEntries>,
    pub album: Option<SongList>,
    pub artist: Option<AlbumList>,
    pub search_result3: Option<SearchResult3>,
    pub album_list2: Option<AlbumList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubsonicError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SongList {
    #[serde(default, deserialize_with = "one_or_many")]
    pub song: Vec<Track>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistList {
    #[serde(default, deserialize_with = "one_or_many")]
    pub playlist: Vec<PlaylistRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistEntries {
    #[serde(default, deserialize_with = "one_or_many")]
    pub entry: Vec<Track>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlbumList {
    #[serde(default, deserialize_with = "one_or_many")]
    pub album: Vec<AlbumRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResult3 {
    #[serde(default, deserialize_with = "one_or_many")]
    pub song: Vec<Track>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub album: Vec<AlbumRef>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub artist: Vec<ArtistRef>,
}

// Some servers collapse single-element lists into a bare object.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}
