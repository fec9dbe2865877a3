use crate::{
    error::Result,
    subsonic::{CatalogClient, SubsonicClient},
    types::{AlbumRef, ArtistRef, PlaylistRef, SearchResult3, Track},
};

const SEARCH_PAGE_SIZE: u32 = 50;
const ALBUM_LIST_SIZE: u32 = 50;

#[derive(Clone, Copy)]
enum SearchTarget {
    Songs,
    Albums,
    Artists,
}

impl SubsonicClient {
    // search3 always returns all three lists; only the requested one gets a
    // non-zero count.
    async fn search(
        &self,
        query: &str,
        offset: u32,
        target: SearchTarget,
    ) -> Result<SearchResult3> {
        let count = |wanted: bool| if wanted { SEARCH_PAGE_SIZE } else { 0 };
        let (songs, albums, artists) = match target {
            SearchTarget::Songs => (true, false, false),
            SearchTarget::Albums => (false, true, false),
            SearchTarget::Artists => (false, false, true),
        };

        let res = self
            .request(
                "search3",
                &[
                    ("query", query.to_string()),
                    ("songCount", count(songs).to_string()),
                    ("songOffset", offset.to_string()),
                    ("albumCount", count(albums).to_string()),
                    ("albumOffset", offset.to_string()),
                    ("artistCount", count(artists).to_string()),
                    ("artistOffset", offset.to_string()),
                ],
            )
            .await?;

        Ok(res.search_result3.unwrap_or_default())
    }
}

impl CatalogClient for SubsonicClient {
    async fn ping(&self) -> Result<()> {
        self.request("ping", &[]).await.map(|_| ())
    }

    async fn get_starred(&self) -> Result<Vec<Track>> {
        let res = self.request("getStarred2", &[]).await?;
        Ok(res.starred2.unwrap_or_default().song)
    }

    async fn get_playlists(&self) -> Result<Vec<PlaylistRef>> {
        let res = self.request("getPlaylists", &[]).await?;
        Ok(res.playlists.unwrap_or_default().playlist)
    }

    async fn get_playlist_tracks(&self, id: &str) -> Result<Vec<Track>> {
        let res = self.request("getPlaylist", &[("id", id.to_string())]).await?;
        Ok(res.playlist.unwrap_or_default().entry)
    }

    async fn get_album_tracks(&self, id: &str) -> Result<Vec<Track>> {
        let res = self.request("getAlbum", &[("id", id.to_string())]).await?;
        Ok(res.album.unwrap_or_default().song)
    }

    async fn get_artist_albums(&self, id: &str) -> Result<Vec<AlbumRef>> {
        let res = self.request("getArtist", &[("id", id.to_string())]).await?;
        Ok(res.artist.unwrap_or_default().album)
    }

    async fn search_tracks(&self, query: &str, offset: u32) -> Result<Vec<Track>> {
        Ok(self.search(query, offset, SearchTarget::Songs).await?.song)
    }

    async fn search_albums(&self, query: &str, offset: u32) -> Result<Vec<AlbumRef>> {
        Ok(self.search(query, offset, SearchTarget::Albums).await?.album)
    }

    async fn search_artists(&self, query: &str, offset: u32) -> Result<Vec<ArtistRef>> {
        Ok(self.search(query, offset, SearchTarget::Artists).await?.artist)
    }

    async fn get_album_list(&self, kind: &str) -> Result<Vec<AlbumRef>> {
        let res = self
            .request(
                "getAlbumList2",
                &[
                    ("type", kind.to_string()),
                    ("size", ALBUM_LIST_SIZE.to_string()),
                ],
            )
            .await?;
        Ok(res.album_list2.unwrap_or_default().album)
    }
}
