use serde::{Deserialize, Serialize};

use stockflow_core::ItemId;

use crate::item::Item;
use crate::movement::StockMovement;

/// Comparison of an item's stored stock against its movement ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub item_id: ItemId,
    pub stock: u64,
    /// Sum of input quantities minus sum of output quantities.
    pub ledger_total: i128,
    pub movement_count: usize,
    pub consistent: bool,
}

impl Reconciliation {
    pub fn compute<'a>(
        item: &Item,
        movements: impl IntoIterator<Item = &'a StockMovement>,
    ) -> Self {
        let item_id = item.id();
        let (ledger_total, movement_count) = movements
            .into_iter()
            .filter(|m| m.item_id == item_id)
            .fold((0i128, 0usize), |(total, n), m| (total + m.signed_quantity(), n + 1));

        Self {
            item_id,
            stock: item.stock(),
            ledger_total,
            movement_count,
            consistent: ledger_total == i128::from(item.stock()),
        }
    }
}
