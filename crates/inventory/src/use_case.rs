use chrono::Utc;
use serde::{Deserialize, Serialize};

use stockflow_core::ItemId;

use crate::error::StockMovementError;
use crate::movement::{NewStockMovement, StockMovement, StockMovementInput};
use crate::repository::{ItemRepository, StockMovementRepository};
use crate::validator::StockMovementValidator;

/// Result of an accepted movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovementOutcome {
    pub movement: StockMovement,
    /// Item stock after the movement was committed.
    pub new_stock: u64,
}

/// Records stock movements against items.
///
/// Lookup, then validation, then one atomic commit of the movement together
/// with the item's new stock. Nothing is written unless every check passes.
#[derive(Debug, Clone)]
pub struct StockUseCase<I, M> {
    items: I,
    movements: M,
    validator: StockMovementValidator,
}

impl<I, M> StockUseCase<I, M>
where
    I: ItemRepository,
    M: StockMovementRepository,
{
    pub fn new(items: I, movements: M) -> Self {
        Self {
            items,
            movements,
            validator: StockMovementValidator,
        }
    }

    pub fn execute(
        &self,
        input: StockMovementInput,
    ) -> Result<StockMovementOutcome, StockMovementError> {
        // A missing, non-string or unparseable id cannot name an existing item.
        let parsed = input.item_id.as_str().and_then(|raw| raw.parse::<ItemId>().ok());
        let Some(item_id) = parsed else {
            tracing::warn!(item_id = %input.item_id, "stock movement rejected: unknown item");
            return Err(StockMovementError::ResourceNotFound);
        };

        let Some(item) = self.items.find_by_id(&item_id)? else {
            tracing::warn!(%item_id, "stock movement rejected: unknown item");
            return Err(StockMovementError::ResourceNotFound);
        };

        let validated = self
            .validator
            .validate(item.stock(), &input.quantity, &input.operation)
            .inspect_err(|e| {
                tracing::warn!(
                    %item_id,
                    quantity = %input.quantity,
                    operation = %input.operation,
                    error = %e,
                    "stock movement rejected"
                );
            })?;

        let new = NewStockMovement {
            item_id,
            quantity: validated.quantity,
            operation: validated.operation,
            description: input.description,
            created_at: input.created_at.unwrap_or_else(Utc::now),
        };

        let movement = self.movements.create(new, validated.transition)?;

        tracing::info!(
            %item_id,
            movement_id = %movement.id,
            operation = %movement.operation,
            quantity = movement.quantity.get(),
            stock_before = validated.transition.expected,
            stock_after = validated.transition.new,
            "stock movement recorded"
        );

        Ok(StockMovementOutcome {
            new_stock: movement.stock_after,
            movement,
        })
    }
}
