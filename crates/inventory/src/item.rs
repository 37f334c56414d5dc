use chrono::{DateTime, Utc};
use serde::Serialize;

use stockflow_core::{DomainError, DomainResult, ItemId, Money};

/// Inventory item: a merchandise/service/supply record with tracked on-hand stock.
///
/// Stock starts at zero and only changes through accepted stock movements; it is
/// unsigned, so a negative on-hand quantity is unrepresentable. Only built
/// through `Item::new`, so there is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    cost: Money,
    price: Money,
    stock: u64,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Create a brand new item with zero stock.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        cost: Money,
        price: Money,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            cost,
            price,
            stock: 0,
            created_at,
        })
    }

    /// Same item with a different on-hand quantity.
    ///
    /// Used by storage adapters when committing a stock transition and when
    /// rehydrating stored items; domain code goes through `StockUseCase`.
    pub fn with_stock(mut self, stock: u64) -> Self {
        self.stock = stock;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_with_zero_stock() {
        let item = Item::new(
            ItemId::new(),
            "Widget",
            Money::from_minor_units(250).unwrap(),
            Money::from_minor_units(499).unwrap(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(item.stock(), 0);
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.price().minor_units(), 499);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err =
            Item::new(ItemId::new(), "   ", Money::ZERO, Money::ZERO, Utc::now()).unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn with_stock_keeps_identity() {
        let item =
            Item::new(ItemId::new(), "Widget", Money::ZERO, Money::ZERO, Utc::now()).unwrap();
        let id = item.id();
        let restocked = item.with_stock(12);
        assert_eq!(restocked.id(), id);
        assert_eq!(restocked.stock(), 12);
    }
}
