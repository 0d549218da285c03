use mediaaccess_common::{CapabilityKind, ProviderId, Result};

use super::{backend, found, MediaService};
use crate::media::{
    Category, Genre, ItemCount, MusicAlbumBasic, MusicArtistBasic, MusicTrackBasic,
    MusicTrackDetailed,
};
use crate::query::{ListQuery, QueryExt};

const KIND: CapabilityKind = CapabilityKind::Music;

fn track_on_album(track: &MusicTrackBasic, album: &str) -> bool {
    track.album_id.as_deref() == Some(album)
}

fn detailed_track_on_album(track: &MusicTrackDetailed, album: &str) -> bool {
    track_on_album(&track.basic, album)
}

fn album_by_artist(album: &MusicAlbumBasic, artist: &str) -> bool {
    album.album_artist_id.as_deref() == Some(artist)
}

impl MediaService {
    pub fn music_categories(&self, provider: ProviderId) -> Result<Vec<Category>> {
        let lib = self.registry.music(provider)?;
        let categories = lib.categories().map_err(backend(KIND, provider))?;
        Ok(categories.tagged(provider).collect())
    }

    pub fn music_genres(&self, provider: ProviderId) -> Result<Vec<Genre>> {
        let lib = self.registry.music(provider)?;
        let genres = lib.genres().map_err(backend(KIND, provider))?;
        Ok(genres.tagged(provider).collect())
    }

    // -- Tracks --------------------------------------------------------------

    pub fn music_track_count(&self, provider: ProviderId, genre: Option<&str>) -> Result<ItemCount> {
        let lib = self.registry.music(provider)?;
        let count = lib
            .tracks_basic()
            .map_err(backend(KIND, provider))?
            .filter_genre(genre)
            .count();
        Ok(ItemCount { count })
    }

    pub fn music_tracks_basic(
        &self,
        provider: ProviderId,
        query: &ListQuery,
    ) -> Result<Vec<MusicTrackBasic>> {
        let lib = self.registry.music(provider)?;
        let tracks = lib.tracks_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(tracks).tagged(provider).collect())
    }

    pub fn music_tracks_detailed(
        &self,
        provider: ProviderId,
        query: &ListQuery,
    ) -> Result<Vec<MusicTrackDetailed>> {
        let lib = self.registry.music(provider)?;
        let tracks = lib.tracks_detailed().map_err(backend(KIND, provider))?;
        Ok(query.apply(tracks).tagged(provider).collect())
    }

    pub fn music_tracks_basic_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<MusicTrackBasic>> {
        let lib = self.registry.music(provider)?;
        let tracks = lib.tracks_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(tracks).take_range(start, end).tagged(provider).collect())
    }

    pub fn music_tracks_detailed_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<MusicTrackDetailed>> {
        let lib = self.registry.music(provider)?;
        let tracks = lib.tracks_detailed().map_err(backend(KIND, provider))?;
        Ok(query.apply(tracks).take_range(start, end).tagged(provider).collect())
    }

    pub fn music_track_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<MusicTrackBasic> {
        let lib = self.registry.music(provider)?;
        let track = lib.track_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("music track", id, provider, track)
    }

    pub fn music_track_detailed_by_id(
        &self,
        provider: ProviderId,
        id: &str,
    ) -> Result<MusicTrackDetailed> {
        let lib = self.registry.music(provider)?;
        let track = lib.track_detailed_by_id(id).map_err(backend(KIND, provider))?;
        found("music track", id, provider, track)
    }

    pub fn music_tracks_basic_for_album(
        &self,
        provider: ProviderId,
        album: &str,
        query: &ListQuery,
    ) -> Result<Vec<MusicTrackBasic>> {
        let lib = self.registry.music(provider)?;
        let tracks = lib
            .tracks_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(album), track_on_album);
        Ok(query.apply(tracks).tagged(provider).collect())
    }

    pub fn music_tracks_detailed_for_album(
        &self,
        provider: ProviderId,
        album: &str,
        query: &ListQuery,
    ) -> Result<Vec<MusicTrackDetailed>> {
        let lib = self.registry.music(provider)?;
        let tracks = lib
            .tracks_detailed()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(album), detailed_track_on_album);
        Ok(query.apply(tracks).tagged(provider).collect())
    }

    // -- Albums --------------------------------------------------------------

    pub fn music_album_count(
        &self,
        provider: ProviderId,
        genre: Option<&str>,
        category: Option<&str>,
    ) -> Result<ItemCount> {
        let lib = self.registry.music(provider)?;
        let count = lib
            .albums_basic()
            .map_err(backend(KIND, provider))?
            .filter_genre(genre)
            .filter_category(category)
            .count();
        Ok(ItemCount { count })
    }

    pub fn music_albums_basic(
        &self,
        provider: ProviderId,
        query: &ListQuery,
    ) -> Result<Vec<MusicAlbumBasic>> {
        let lib = self.registry.music(provider)?;
        let albums = lib.albums_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(albums).tagged(provider).collect())
    }

    pub fn music_albums_basic_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<MusicAlbumBasic>> {
        let lib = self.registry.music(provider)?;
        let albums = lib.albums_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(albums).take_range(start, end).tagged(provider).collect())
    }

    pub fn music_album_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<MusicAlbumBasic> {
        let lib = self.registry.music(provider)?;
        let album = lib.album_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("music album", id, provider, album)
    }

    /// Albums whose album artist is `artist`.
    pub fn music_albums_basic_for_artist(
        &self,
        provider: ProviderId,
        artist: &str,
        query: &ListQuery,
    ) -> Result<Vec<MusicAlbumBasic>> {
        let lib = self.registry.music(provider)?;
        let albums = lib
            .albums_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(artist), album_by_artist);
        Ok(query.apply(albums).tagged(provider).collect())
    }

    // -- Artists -------------------------------------------------------------

    pub fn music_artist_count(&self, provider: ProviderId, category: Option<&str>) -> Result<ItemCount> {
        let lib = self.registry.music(provider)?;
        let count = lib
            .artists_basic()
            .map_err(backend(KIND, provider))?
            .filter_category(category)
            .count();
        Ok(ItemCount { count })
    }

    pub fn music_artists_basic(
        &self,
        provider: ProviderId,
        query: &ListQuery,
    ) -> Result<Vec<MusicArtistBasic>> {
        let lib = self.registry.music(provider)?;
        let artists = lib.artists_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(artists).tagged(provider).collect())
    }

    pub fn music_artists_basic_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<MusicArtistBasic>> {
        let lib = self.registry.music(provider)?;
        let artists = lib.artists_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(artists).take_range(start, end).tagged(provider).collect())
    }

    pub fn music_artist_basic_by_id(
        &self,
        provider: ProviderId,
        id: &str,
    ) -> Result<MusicArtistBasic> {
        let lib = self.registry.music(provider)?;
        let artist = lib.artist_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("music artist", id, provider, artist)
    }
}
