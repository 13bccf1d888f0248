use super::catalog::{Extra, FlavorCatalog, FlavorId, HouseBurger, Protein, Side, Tower};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to the menu catalog.
///
/// Every call returns an owned snapshot; the quote service fetches what it
/// needs per order and never holds on to it.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn protein(&self, id: &str) -> Result<Option<Protein>>;
    async fn house(&self, id: &str) -> Result<Option<HouseBurger>>;
    async fn tower(&self, id: &str) -> Result<Option<Tower>>;
    async fn side(&self, id: &str) -> Result<Option<Side>>;
    async fn extra(&self, id: &str) -> Result<Option<Extra>>;
    async fn flavors(&self) -> Result<FlavorCatalog>;
    /// Flavors that are always free on the given protein. Empty when none are configured.
    async fn default_flavors(&self, protein_id: &str) -> Result<Vec<FlavorId>>;
}

pub type CatalogStoreBox = Box<dyn CatalogStore>;
