use std::collections::HashMap;
use std::sync::RwLock;

use stockflow_core::{ItemId, StockMovementId};
use stockflow_inventory::{
    Item, ItemRepository, NewStockMovement, RepositoryError, StockMovement,
    StockMovementRepository, StockTransition,
};

#[derive(Debug, Default)]
struct Tables {
    items: HashMap<ItemId, Item>,
    /// Insertion order of items (listing is oldest first).
    item_order: Vec<ItemId>,
    /// Append-only movement log per item.
    movements: HashMap<ItemId, Vec<StockMovement>>,
}

/// In-memory item registry + append-only movement ledger.
///
/// Intended for tests/dev. A single lock guards both tables, so the stock check,
/// the movement append and the stock write of `create` are one atomic step.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an item with an arbitrary stock level, bypassing the ledger.
    ///
    /// For fixtures only: the seeded stock has no backing movements.
    pub fn seed(&self, item: Item) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        let id = item.id();
        if tables.items.insert(id, item).is_none() {
            tables.item_order.push(id);
        }
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))
    }
}

impl ItemRepository for InMemoryInventoryStore {
    fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, RepositoryError> {
        let found = self.read()?.items.get(id).cloned();
        tracing::debug!(item_id = %id, found = found.is_some(), "item lookup");
        Ok(found)
    }

    fn create(&self, item: Item) -> Result<Item, RepositoryError> {
        let mut tables = self.write()?;
        let id = item.id();
        if tables.items.contains_key(&id) {
            return Err(RepositoryError::DuplicateItem(id));
        }
        tables.items.insert(id, item.clone());
        tables.item_order.push(id);
        Ok(item)
    }

    fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        let tables = self.read()?;
        Ok(tables
            .item_order
            .iter()
            .filter_map(|id| tables.items.get(id).cloned())
            .collect())
    }
}

impl StockMovementRepository for InMemoryInventoryStore {
    fn create(
        &self,
        movement: NewStockMovement,
        transition: StockTransition,
    ) -> Result<StockMovement, RepositoryError> {
        let mut tables = self.write()?;
        let item_id = movement.item_id;

        let item = tables
            .items
            .get_mut(&item_id)
            .ok_or(RepositoryError::ItemNotFound(item_id))?;

        // Optimistic check: stock must not have moved since the caller read it.
        if item.stock() != transition.expected {
            return Err(RepositoryError::Conflict {
                expected: transition.expected,
                actual: item.stock(),
            });
        }

        *item = item.clone().with_stock(transition.new);

        let stored = StockMovement::from_new(StockMovementId::new(), movement, transition.new);
        tables
            .movements
            .entry(item_id)
            .or_default()
            .push(stored.clone());

        Ok(stored)
    }

    fn list_by_item(&self, item_id: &ItemId) -> Result<Vec<StockMovement>, RepositoryError> {
        Ok(self
            .read()?
            .movements
            .get(item_id)
            .cloned()
            .unwrap_or_default())
    }
}
