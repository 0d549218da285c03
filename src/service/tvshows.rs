use mediaaccess_common::{CapabilityKind, ProviderId, Result};

use super::{backend, found, MediaService};
use crate::media::{
    Category, Genre, ItemCount, TvEpisodeBasic, TvEpisodeDetailed, TvSeasonBasic,
    TvSeasonDetailed, TvShowBasic, TvShowDetailed,
};
use crate::query::{ListQuery, QueryExt};

const KIND: CapabilityKind = CapabilityKind::TvShow;

fn season_of_show(season: &TvSeasonBasic, show: &str) -> bool {
    season.show_id == show
}

fn detailed_season_of_show(season: &TvSeasonDetailed, show: &str) -> bool {
    season.basic.show_id == show
}

fn episode_of_show(episode: &TvEpisodeBasic, show: &str) -> bool {
    episode.show_id == show
}

fn detailed_episode_of_show(episode: &TvEpisodeDetailed, show: &str) -> bool {
    episode.basic.show_id == show
}

fn episode_of_season(episode: &TvEpisodeBasic, season: &str) -> bool {
    episode.season_id == season
}

fn detailed_episode_of_season(episode: &TvEpisodeDetailed, season: &str) -> bool {
    episode.basic.season_id == season
}

impl MediaService {
    // -- Shows ---------------------------------------------------------------

    pub fn tvshow_categories(&self, provider: ProviderId) -> Result<Vec<Category>> {
        let lib = self.registry.tvshows(provider)?;
        let categories = lib.categories().map_err(backend(KIND, provider))?;
        Ok(categories.tagged(provider).collect())
    }

    pub fn tvshow_genres(&self, provider: ProviderId) -> Result<Vec<Genre>> {
        let lib = self.registry.tvshows(provider)?;
        let genres = lib.genres().map_err(backend(KIND, provider))?;
        Ok(genres.tagged(provider).collect())
    }

    pub fn tvshow_count(
        &self,
        provider: ProviderId,
        genre: Option<&str>,
        category: Option<&str>,
    ) -> Result<ItemCount> {
        let lib = self.registry.tvshows(provider)?;
        let count = lib
            .tvshows_basic()
            .map_err(backend(KIND, provider))?
            .filter_genre(genre)
            .filter_category(category)
            .count();
        Ok(ItemCount { count })
    }

    pub fn tvshows_basic(&self, provider: ProviderId, query: &ListQuery) -> Result<Vec<TvShowBasic>> {
        let lib = self.registry.tvshows(provider)?;
        let shows = lib.tvshows_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(shows).tagged(provider).collect())
    }

    pub fn tvshows_detailed(
        &self,
        provider: ProviderId,
        query: &ListQuery,
    ) -> Result<Vec<TvShowDetailed>> {
        let lib = self.registry.tvshows(provider)?;
        let shows = lib.tvshows_detailed().map_err(backend(KIND, provider))?;
        Ok(query.apply(shows).tagged(provider).collect())
    }

    pub fn tvshows_basic_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<TvShowBasic>> {
        let lib = self.registry.tvshows(provider)?;
        let shows = lib.tvshows_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(shows).take_range(start, end).tagged(provider).collect())
    }

    pub fn tvshows_detailed_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<TvShowDetailed>> {
        let lib = self.registry.tvshows(provider)?;
        let shows = lib.tvshows_detailed().map_err(backend(KIND, provider))?;
        Ok(query.apply(shows).take_range(start, end).tagged(provider).collect())
    }

    pub fn tvshow_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<TvShowBasic> {
        let lib = self.registry.tvshows(provider)?;
        let show = lib.tvshow_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("tv show", id, provider, show)
    }

    pub fn tvshow_detailed_by_id(&self, provider: ProviderId, id: &str) -> Result<TvShowDetailed> {
        let lib = self.registry.tvshows(provider)?;
        let show = lib.tvshow_detailed_by_id(id).map_err(backend(KIND, provider))?;
        found("tv show", id, provider, show)
    }

    // -- Seasons -------------------------------------------------------------

    pub fn tvseason_count_for_tvshow(&self, provider: ProviderId, show: &str) -> Result<ItemCount> {
        let lib = self.registry.tvshows(provider)?;
        let count = lib
            .seasons_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), season_of_show)
            .count();
        Ok(ItemCount { count })
    }

    pub fn tvseasons_basic_for_tvshow(
        &self,
        provider: ProviderId,
        show: &str,
        query: &ListQuery,
    ) -> Result<Vec<TvSeasonBasic>> {
        let lib = self.registry.tvshows(provider)?;
        let seasons = lib
            .seasons_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), season_of_show);
        Ok(query.apply(seasons).tagged(provider).collect())
    }

    pub fn tvseasons_detailed_for_tvshow(
        &self,
        provider: ProviderId,
        show: &str,
        query: &ListQuery,
    ) -> Result<Vec<TvSeasonDetailed>> {
        let lib = self.registry.tvshows(provider)?;
        let seasons = lib
            .seasons_detailed()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), detailed_season_of_show);
        Ok(query.apply(seasons).tagged(provider).collect())
    }

    pub fn tvseason_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<TvSeasonBasic> {
        let lib = self.registry.tvshows(provider)?;
        let season = lib.season_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("tv season", id, provider, season)
    }

    pub fn tvseason_detailed_by_id(
        &self,
        provider: ProviderId,
        id: &str,
    ) -> Result<TvSeasonDetailed> {
        let lib = self.registry.tvshows(provider)?;
        let season = lib.season_detailed_by_id(id).map_err(backend(KIND, provider))?;
        found("tv season", id, provider, season)
    }

    // -- Episodes ------------------------------------------------------------

    pub fn tvepisode_count(&self, provider: ProviderId) -> Result<ItemCount> {
        let lib = self.registry.tvshows(provider)?;
        let count = lib.episodes_basic().map_err(backend(KIND, provider))?.count();
        Ok(ItemCount { count })
    }

    pub fn tvepisode_count_for_tvshow(&self, provider: ProviderId, show: &str) -> Result<ItemCount> {
        let lib = self.registry.tvshows(provider)?;
        let count = lib
            .episodes_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), episode_of_show)
            .count();
        Ok(ItemCount { count })
    }

    pub fn tvepisode_count_for_season(
        &self,
        provider: ProviderId,
        season: &str,
    ) -> Result<ItemCount> {
        let lib = self.registry.tvshows(provider)?;
        let count = lib
            .episodes_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(season), episode_of_season)
            .count();
        Ok(ItemCount { count })
    }

    pub fn tvepisodes_basic_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeBasic>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib.episodes_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(episodes).take_range(start, end).tagged(provider).collect())
    }

    pub fn tvepisodes_detailed_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeDetailed>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib.episodes_detailed().map_err(backend(KIND, provider))?;
        Ok(query.apply(episodes).take_range(start, end).tagged(provider).collect())
    }

    pub fn tvepisodes_basic_for_tvshow(
        &self,
        provider: ProviderId,
        show: &str,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeBasic>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib
            .episodes_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), episode_of_show);
        Ok(query.apply(episodes).tagged(provider).collect())
    }

    pub fn tvepisodes_detailed_for_tvshow(
        &self,
        provider: ProviderId,
        show: &str,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeDetailed>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib
            .episodes_detailed()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), detailed_episode_of_show);
        Ok(query.apply(episodes).tagged(provider).collect())
    }

    /// Episodes of one show at positions `start..end` after sorting.
    pub fn tvepisodes_basic_for_tvshow_by_range(
        &self,
        provider: ProviderId,
        show: &str,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeBasic>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib
            .episodes_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), episode_of_show);
        Ok(query.apply(episodes).take_range(start, end).tagged(provider).collect())
    }

    pub fn tvepisodes_detailed_for_tvshow_by_range(
        &self,
        provider: ProviderId,
        show: &str,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeDetailed>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib
            .episodes_detailed()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(show), detailed_episode_of_show);
        Ok(query.apply(episodes).take_range(start, end).tagged(provider).collect())
    }

    pub fn tvepisodes_basic_for_season(
        &self,
        provider: ProviderId,
        season: &str,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeBasic>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib
            .episodes_basic()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(season), episode_of_season);
        Ok(query.apply(episodes).tagged(provider).collect())
    }

    pub fn tvepisodes_detailed_for_season(
        &self,
        provider: ProviderId,
        season: &str,
        query: &ListQuery,
    ) -> Result<Vec<TvEpisodeDetailed>> {
        let lib = self.registry.tvshows(provider)?;
        let episodes = lib
            .episodes_detailed()
            .map_err(backend(KIND, provider))?
            .filter_by(Some(season), detailed_episode_of_season);
        Ok(query.apply(episodes).tagged(provider).collect())
    }

    pub fn tvepisode_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<TvEpisodeBasic> {
        let lib = self.registry.tvshows(provider)?;
        let episode = lib.episode_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("tv episode", id, provider, episode)
    }

    pub fn tvepisode_detailed_by_id(
        &self,
        provider: ProviderId,
        id: &str,
    ) -> Result<TvEpisodeDetailed> {
        let lib = self.registry.tvshows(provider)?;
        let episode = lib.episode_detailed_by_id(id).map_err(backend(KIND, provider))?;
        found("tv episode", id, provider, episode)
    }
}
