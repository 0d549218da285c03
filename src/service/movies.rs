use mediaaccess_common::{CapabilityKind, ProviderId, Result};

use super::{backend, found, MediaService};
use crate::media::{Category, Genre, ItemCount, MovieBasic, MovieDetailed};
use crate::query::{ListQuery, QueryExt};

const KIND: CapabilityKind = CapabilityKind::Movie;

impl MediaService {
    pub fn movie_categories(&self, provider: ProviderId) -> Result<Vec<Category>> {
        let lib = self.registry.movies(provider)?;
        let categories = lib.categories().map_err(backend(KIND, provider))?;
        Ok(categories.tagged(provider).collect())
    }

    pub fn movie_genres(&self, provider: ProviderId) -> Result<Vec<Genre>> {
        let lib = self.registry.movies(provider)?;
        let genres = lib.genres().map_err(backend(KIND, provider))?;
        Ok(genres.tagged(provider).collect())
    }

    /// Number of movies matching the same filters as [`Self::movies_basic`].
    pub fn movie_count(
        &self,
        provider: ProviderId,
        genre: Option<&str>,
        category: Option<&str>,
    ) -> Result<ItemCount> {
        let lib = self.registry.movies(provider)?;
        let count = lib
            .movies_basic()
            .map_err(backend(KIND, provider))?
            .filter_genre(genre)
            .filter_category(category)
            .count();
        Ok(ItemCount { count })
    }

    pub fn movies_basic(&self, provider: ProviderId, query: &ListQuery) -> Result<Vec<MovieBasic>> {
        let lib = self.registry.movies(provider)?;
        let movies = lib.movies_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(movies).tagged(provider).collect())
    }

    pub fn movies_detailed(
        &self,
        provider: ProviderId,
        query: &ListQuery,
    ) -> Result<Vec<MovieDetailed>> {
        let lib = self.registry.movies(provider)?;
        let movies = lib.movies_detailed().map_err(backend(KIND, provider))?;
        Ok(query.apply(movies).tagged(provider).collect())
    }

    pub fn movies_basic_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<MovieBasic>> {
        let lib = self.registry.movies(provider)?;
        let movies = lib.movies_basic().map_err(backend(KIND, provider))?;
        Ok(query
            .apply(movies)
            .take_range(start, end)
            .tagged(provider)
            .collect())
    }

    pub fn movies_detailed_by_range(
        &self,
        provider: ProviderId,
        start: usize,
        end: usize,
        query: &ListQuery,
    ) -> Result<Vec<MovieDetailed>> {
        let lib = self.registry.movies(provider)?;
        let movies = lib.movies_detailed().map_err(backend(KIND, provider))?;
        Ok(query
            .apply(movies)
            .take_range(start, end)
            .tagged(provider)
            .collect())
    }

    pub fn movie_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<MovieBasic> {
        let lib = self.registry.movies(provider)?;
        let movie = lib.movie_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("movie", id, provider, movie)
    }

    pub fn movie_detailed_by_id(&self, provider: ProviderId, id: &str) -> Result<MovieDetailed> {
        let lib = self.registry.movies(provider)?;
        let movie = lib.movie_detailed_by_id(id).map_err(backend(KIND, provider))?;
        found("movie", id, provider, movie)
    }
}
