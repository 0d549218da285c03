use mediaaccess_common::{CapabilityKind, ProviderId, Result};

use super::{backend, found, MediaService};
use crate::media::{Category, ItemCount, PictureBasic, PictureDetailed};
use crate::query::{ListQuery, QueryExt};

const KIND: CapabilityKind = CapabilityKind::Picture;

impl MediaService {
    /// Picture folders, albums, or whatever grouping the backend exposes.
    pub fn picture_categories(&self, provider: ProviderId) -> Result<Vec<Category>> {
        let lib = self.registry.pictures(provider)?;
        let categories = lib.categories().map_err(backend(KIND, provider))?;
        Ok(categories.tagged(provider).collect())
    }

    pub fn picture_count(&self, provider: ProviderId) -> Result<ItemCount> {
        let lib = self.registry.pictures(provider)?;
        let count = lib.pictures_basic().map_err(backend(KIND, provider))?.count();
        Ok(ItemCount { count })
    }

    pub fn pictures_basic(&self, provider: ProviderId, query: &ListQuery) -> Result<Vec<PictureBasic>> {
        let lib = self.registry.pictures(provider)?;
        let pictures = lib.pictures_basic().map_err(backend(KIND, provider))?;
        Ok(query.apply(pictures).tagged(provider).collect())
    }

    pub fn pictures_detailed(
        &self,
        provider: ProviderId,
        query: &ListQuery,
    ) -> Result<Vec<PictureDetailed>> {
        let lib = self.registry.pictures(provider)?;
        let pictures = lib.pictures_detailed().map_err(backend(KIND, provider))?;
        Ok(query.apply(pictures).tagged(provider).collect())
    }

    pub fn pictures_basic_by_category(
        &self,
        provider: ProviderId,
        category: &str,
        query: &ListQuery,
    ) -> Result<Vec<PictureBasic>> {
        let lib = self.registry.pictures(provider)?;
        let pictures = lib
            .pictures_basic_by_category(category)
            .map_err(backend(KIND, provider))?;
        Ok(query.apply(pictures).tagged(provider).collect())
    }

    pub fn pictures_detailed_by_category(
        &self,
        provider: ProviderId,
        category: &str,
        query: &ListQuery,
    ) -> Result<Vec<PictureDetailed>> {
        let lib = self.registry.pictures(provider)?;
        let pictures = lib
            .pictures_detailed_by_category(category)
            .map_err(backend(KIND, provider))?;
        Ok(query.apply(pictures).tagged(provider).collect())
    }

    pub fn picture_basic_by_id(&self, provider: ProviderId, id: &str) -> Result<PictureBasic> {
        let lib = self.registry.pictures(provider)?;
        let picture = lib.picture_basic_by_id(id).map_err(backend(KIND, provider))?;
        found("picture", id, provider, picture)
    }

    pub fn picture_detailed_by_id(&self, provider: ProviderId, id: &str) -> Result<PictureDetailed> {
        let lib = self.registry.pictures(provider)?;
        let picture = lib
            .picture_detailed_by_id(id)
            .map_err(backend(KIND, provider))?;
        found("picture", id, provider, picture)
    }
}
