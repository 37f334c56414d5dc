use serde_json::Value;

use crate::error::StockMovementError;
use crate::movement::{MovementOperation, Quantity, StockTransition};

/// Outcome of a successful validation: typed movement fields plus the stock
/// change to commit with it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidatedMovement {
    pub quantity: Quantity,
    pub operation: MovementOperation,
    pub transition: StockTransition,
}

/// Pure movement rules, checked in a fixed order: quantity, then operation,
/// then the resulting stock.
///
/// Takes the raw JSON values so that a wrongly typed field fails the same way
/// as a wrong value of the right type. Item lookup happens before this runs.
#[derive(Debug, Default, Copy, Clone)]
pub struct StockMovementValidator;

impl StockMovementValidator {
    pub fn validate(
        &self,
        current_stock: u64,
        quantity: &Value,
        operation: &Value,
    ) -> Result<ValidatedMovement, StockMovementError> {
        let quantity =
            Quantity::from_value(quantity).ok_or(StockMovementError::OnlyNaturalNumbers)?;
        let operation =
            MovementOperation::from_value(operation).ok_or(StockMovementError::InvalidOption)?;

        let new_stock = match operation {
            MovementOperation::Output => current_stock
                .checked_sub(quantity.get())
                .ok_or(StockMovementError::StockCannotBeNegative)?,
            MovementOperation::Input => current_stock
                .checked_add(quantity.get())
                .ok_or(StockMovementError::StockOverflow)?,
        };

        Ok(ValidatedMovement {
            quantity,
            operation,
            transition: StockTransition {
                expected: current_stock,
                new: new_stock,
            },
        })
    }
}
