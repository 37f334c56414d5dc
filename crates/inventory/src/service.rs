use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockflow_core::{DomainError, ItemId, Money};

use crate::item::Item;
use crate::ledger::Reconciliation;
use crate::movement::StockMovement;
use crate::repository::{ItemRepository, RepositoryError, StockMovementRepository};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemServiceError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("item not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Request to register a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub cost: Money,
    #[serde(default)]
    pub price: Money,
}

/// Item registry and read side of the movement ledger.
#[derive(Debug, Clone)]
pub struct ItemService<I, M> {
    items: I,
    movements: M,
}

impl<I, M> ItemService<I, M>
where
    I: ItemRepository,
    M: StockMovementRepository,
{
    pub fn new(items: I, movements: M) -> Self {
        Self { items, movements }
    }

    pub fn create_item(&self, request: NewItem) -> Result<Item, ItemServiceError> {
        let item = Item::new(ItemId::new(), request.name, request.cost, request.price, Utc::now())?;
        let item = self.items.create(item)?;
        tracing::info!(item_id = %item.id(), name = item.name(), "item created");
        Ok(item)
    }

    pub fn get_item(&self, id: &ItemId) -> Result<Item, ItemServiceError> {
        self.items.find_by_id(id)?.ok_or(ItemServiceError::NotFound)
    }

    pub fn list_items(&self) -> Result<Vec<Item>, ItemServiceError> {
        Ok(self.items.list()?)
    }

    pub fn movements(&self, id: &ItemId) -> Result<Vec<StockMovement>, ItemServiceError> {
        self.get_item(id)?;
        Ok(self.movements.list_by_item(id)?)
    }

    pub fn reconcile(&self, id: &ItemId) -> Result<Reconciliation, ItemServiceError> {
        let item = self.get_item(id)?;
        let movements = self.movements.list_by_item(id)?;
        let r = Reconciliation::compute(&item, &movements);
        if !r.consistent {
            tracing::error!(
                item_id = %id,
                stock = r.stock,
                ledger_total = %r.ledger_total,
                "stock does not match movement ledger"
            );
        }
        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::movement::StockMovementInput;
    use crate::use_case::StockUseCase;
    use crate::use_case::tests::FakeStore;

    fn service(store: &Arc<FakeStore>) -> ItemService<Arc<FakeStore>, Arc<FakeStore>> {
        ItemService::new(store.clone(), store.clone())
    }

    #[test]
    fn create_item_persists_with_zero_stock() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);

        let item = svc
            .create_item(NewItem {
                name: "Cable".to_string(),
                cost: Money::from_minor_units(120).unwrap(),
                price: Money::from_minor_units(300).unwrap(),
            })
            .unwrap();

        assert_eq!(item.stock(), 0);
        assert_eq!(svc.get_item(&item.id()).unwrap(), item);
        assert_eq!(svc.list_items().unwrap().len(), 1);
    }

    #[test]
    fn blank_name_is_a_validation_error() {
        let store = Arc::new(FakeStore::default());
        let err = service(&store)
            .create_item(NewItem {
                name: " ".to_string(),
                cost: Money::ZERO,
                price: Money::ZERO,
            })
            .unwrap_err();
        assert!(matches!(err, ItemServiceError::Validation(_)));
    }

    #[test]
    fn unknown_item_is_not_found() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);
        assert_eq!(svc.get_item(&ItemId::new()), Err(ItemServiceError::NotFound));
        assert_eq!(svc.movements(&ItemId::new()), Err(ItemServiceError::NotFound));
        assert_eq!(svc.reconcile(&ItemId::new()), Err(ItemServiceError::NotFound));
    }

    #[test]
    fn reconcile_after_movements_is_consistent() {
        let (store, id) = FakeStore::with_item(0);
        let uc = StockUseCase::new(store.clone(), store.clone());
        uc.execute(StockMovementInput::new(id.to_string(), 8.0, "input")).unwrap();
        uc.execute(StockMovementInput::new(id.to_string(), 3.0, "output")).unwrap();
        let _ = uc.execute(StockMovementInput::new(id.to_string(), 9.0, "output"));

        let r = service(&store).reconcile(&id).unwrap();
        assert_eq!(r.stock, 5);
        assert_eq!(r.movement_count, 2);
        assert!(r.consistent);
    }
}
