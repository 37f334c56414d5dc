//! Storage capabilities the inventory logic depends on.
//!
//! Adapters live in `stockflow-infra`; tests use in-memory fakes.

use std::sync::Arc;

use thiserror::Error;

use stockflow_core::ItemId;

use crate::item::Item;
use crate::movement::{NewStockMovement, StockMovement, StockTransition};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Optimistic stock check failed at commit time.
    #[error("stock changed concurrently (expected {expected}, found {actual})")]
    Conflict { expected: u64, actual: u64 },

    #[error("item {0} does not exist")]
    ItemNotFound(ItemId),

    #[error("item {0} already exists")]
    DuplicateItem(ItemId),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Item lookup and registry.
pub trait ItemRepository: Send + Sync {
    fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, RepositoryError>;

    /// Insert a new item. Fails with `DuplicateItem` if the id is taken.
    fn create(&self, item: Item) -> Result<Item, RepositoryError>;

    /// All items, oldest first.
    fn list(&self) -> Result<Vec<Item>, RepositoryError>;
}

/// Append-only movement ledger.
pub trait StockMovementRepository: Send + Sync {
    /// Append a movement and apply `transition` to the item's stock atomically.
    ///
    /// Assigns the movement identifier. If the item's stored stock differs from
    /// `transition.expected`, returns `Conflict` and writes nothing.
    fn create(
        &self,
        movement: NewStockMovement,
        transition: StockTransition,
    ) -> Result<StockMovement, RepositoryError>;

    /// Movements for one item in the order they were committed.
    fn list_by_item(&self, item_id: &ItemId) -> Result<Vec<StockMovement>, RepositoryError>;
}

impl<S> ItemRepository for Arc<S>
where
    S: ItemRepository + ?Sized,
{
    fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn create(&self, item: Item) -> Result<Item, RepositoryError> {
        (**self).create(item)
    }

    fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        (**self).list()
    }
}

impl<S> StockMovementRepository for Arc<S>
where
    S: StockMovementRepository + ?Sized,
{
    fn create(
        &self,
        movement: NewStockMovement,
        transition: StockTransition,
    ) -> Result<StockMovement, RepositoryError> {
        (**self).create(movement, transition)
    }

    fn list_by_item(&self, item_id: &ItemId) -> Result<Vec<StockMovement>, RepositoryError> {
        (**self).list_by_item(item_id)
    }
}
