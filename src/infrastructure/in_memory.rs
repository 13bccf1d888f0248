use crate::domain::catalog::{
    Catalog, Extra, FlavorCatalog, FlavorId, HouseBurger, Protein, Side, Tower,
};
use crate::domain::ports::CatalogStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory catalog.
///
/// Uses `Arc<RwLock<Catalog>>` so clones share the same snapshot and a fresh
/// catalog can be swapped in with [`InMemoryCatalogStore::replace`] while
/// quotes are being served.
#[derive(Default, Clone)]
pub struct InMemoryCatalogStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryCatalogStore {
    /// Creates a new, empty in-memory catalog store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Replaces the whole catalog, e.g. after a menu reload.
    pub async fn replace(&self, catalog: Catalog) {
        *self.catalog.write().await = catalog;
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn protein(&self, id: &str) -> Result<Option<Protein>> {
        Ok(self.catalog.read().await.proteins.get(id).cloned())
    }

    async fn house(&self, id: &str) -> Result<Option<HouseBurger>> {
        Ok(self.catalog.read().await.houses.get(id).cloned())
    }

    async fn tower(&self, id: &str) -> Result<Option<Tower>> {
        Ok(self.catalog.read().await.towers.get(id).cloned())
    }

    async fn side(&self, id: &str) -> Result<Option<Side>> {
        Ok(self.catalog.read().await.sides.get(id).cloned())
    }

    async fn extra(&self, id: &str) -> Result<Option<Extra>> {
        Ok(self.catalog.read().await.extras.get(id).cloned())
    }

    async fn flavors(&self) -> Result<FlavorCatalog> {
        Ok(self.catalog.read().await.flavors.clone())
    }

    async fn default_flavors(&self, protein_id: &str) -> Result<Vec<FlavorId>> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .protein_defaults
            .get(protein_id)
            .cloned()
            .unwrap_or_default())
    }
}
