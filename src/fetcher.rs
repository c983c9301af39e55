use bytes::Bytes;
use log::debug;

use crate::clients::DeezerClient;
use crate::clients::deezer::MusicApi;
use crate::clients::entities::SongMetadata;
use crate::clients::errors::{Error, Result};

/// Resolves a song name to a [`SongMetadata`] record via the injected provider
pub struct MetadataFetcher<A> {
    api: A,
}

impl<A: MusicApi> MetadataFetcher<A> {
    pub fn new(api: A) -> Self {
        MetadataFetcher { api }
    }

    /// Look up a song by free-text name.
    ///
    /// Searches the provider and assembles the record from the first match;
    /// returns `Ok(None)` when the search has no matches at all. The
    /// contributors call is issued only after the search has resolved, since
    /// it needs the matched track id.
    pub async fn get_song_data(&self, song_name: &str) -> Result<Option<SongMetadata>> {
        let response = self.api.search_tracks(song_name).await?;

        if response.total == 0 {
            debug!("No matches for {song_name:?}");
            return Ok(None);
        }

        let candidate = response.data.into_iter().next().ok_or_else(|| {
            Error::UnexpectedResponse(format!(
                "search reported {} matches but returned no tracks",
                response.total
            ))
        })?;

        let track = self.api.get_track(candidate.id).await?;
        let artist: Vec<String> = track.contributors.into_iter().map(|c| c.name).collect();

        Ok(Some(SongMetadata {
            artist,
            title: candidate.title,
            album: candidate.album.title,
            cover: candidate.album.cover_big,
        }))
    }

    /// Download the raw bytes behind a cover-art URL
    pub async fn get_cover_image(&self, cover_url: &str) -> Result<Bytes> {
        self.api.fetch_image(cover_url).await
    }
}

impl MetadataFetcher<DeezerClient> {
    // Create a fetcher backed by the public Deezer API
    pub fn try_default() -> Result<Self> {
        Ok(MetadataFetcher::new(DeezerClient::try_default()?))
    }
}
