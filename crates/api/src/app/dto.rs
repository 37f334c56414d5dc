use serde::Deserialize;

use stockflow_core::{DomainError, Money};
use stockflow_inventory::NewItem;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /items`. Amounts are in minor currency units (cents).
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub cost: Option<i64>,
    pub price: Option<i64>,
}

impl CreateItemRequest {
    pub fn into_new_item(self) -> Result<NewItem, DomainError> {
        Ok(NewItem {
            name: self.name,
            cost: money_or_zero(self.cost)?,
            price: money_or_zero(self.price)?,
        })
    }
}

fn money_or_zero(amount: Option<i64>) -> Result<Money, DomainError> {
    amount.map_or(Ok(Money::ZERO), Money::from_minor_units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_amounts_default_to_zero() {
        let req: CreateItemRequest = serde_json::from_str(r#"{"name":"Nut"}"#).unwrap();
        let item = req.into_new_item().unwrap();
        assert_eq!(item.cost, Money::ZERO);
        assert_eq!(item.price, Money::ZERO);
    }

    #[test]
    fn negative_amount_is_a_validation_error() {
        let req = CreateItemRequest {
            name: "Nut".to_string(),
            cost: Some(-5),
            price: None,
        };
        assert!(matches!(req.into_new_item(), Err(DomainError::Validation(_))));
    }
}
