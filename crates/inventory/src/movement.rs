use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use stockflow_core::{ItemId, StockMovementId};

/// Largest integer a JSON number (IEEE-754 double) carries exactly.
pub const MAX_QUANTITY: u64 = 9_007_199_254_740_991;

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementOperation {
    /// Increases the item's stock.
    Input,
    /// Decreases the item's stock.
    Output,
}

impl MovementOperation {
    /// Parse the wire form. Only the exact lowercase names are recognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "input" => Some(Self::Input),
            "output" => Some(Self::Output),
            _ => None,
        }
    }

    /// Anything that is not a JSON string is not a recognized operation.
    pub fn from_value(raw: &Value) -> Option<Self> {
        raw.as_str().and_then(Self::parse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl core::fmt::Display for MovementOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A natural number of units (>= 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(value: u64) -> Option<Self> {
        (1..=MAX_QUANTITY).contains(&value).then_some(Self(value))
    }

    /// Accept a raw JSON-style number only when it is a whole number >= 1.
    ///
    /// `0`, `-1`, `1.5`, `NaN` and infinities all yield `None`.
    pub fn from_number(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < 1.0 || value > MAX_QUANTITY as f64 {
            return None;
        }
        Self::new(value as u64)
    }

    /// Same rules for a raw JSON value; anything that is not a number yields `None`.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let Value::Number(n) = raw else {
            return None;
        };
        match n.as_u64() {
            Some(whole) => Self::new(whole),
            None => n.as_f64().and_then(Self::from_number),
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Quantity {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("quantity must be between 1 and {MAX_QUANTITY}"))
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// Raw movement request as it arrives from a caller, before validation.
///
/// `item_id`, `quantity` and `operation` stay untyped JSON so that a missing or
/// wrongly typed field reaches the movement rules (and their error order)
/// instead of failing deserialization. Missing fields read as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovementInput {
    #[serde(default)]
    pub item_id: Value,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub operation: Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StockMovementInput {
    pub fn new(
        item_id: impl Into<String>,
        quantity: impl Into<Value>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            item_id: Value::String(item_id.into()),
            quantity: quantity.into(),
            operation: Value::String(operation.into()),
            description: None,
            created_at: None,
        }
    }
}

/// A validated movement waiting to be committed (no identifier yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStockMovement {
    pub item_id: ItemId,
    pub quantity: Quantity,
    pub operation: MovementOperation,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Stock change committed together with a movement.
///
/// The repository applies `new` only if the item's stock still equals
/// `expected`, otherwise nothing is written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTransition {
    pub expected: u64,
    pub new: u64,
}

/// Immutable, append-only ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: StockMovementId,
    pub item_id: ItemId,
    pub quantity: Quantity,
    pub operation: MovementOperation,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Item stock right after this movement was applied.
    pub stock_after: u64,
}

impl StockMovement {
    /// Assign an identifier to a committed movement.
    pub fn from_new(id: StockMovementId, new: NewStockMovement, stock_after: u64) -> Self {
        Self {
            id,
            item_id: new.item_id,
            quantity: new.quantity,
            operation: new.operation,
            description: new.description,
            created_at: new.created_at,
            stock_after,
        }
    }

    /// Signed contribution of this entry to the item's stock.
    pub fn signed_quantity(&self) -> i128 {
        match self.operation {
            MovementOperation::Input => i128::from(self.quantity.get()),
            MovementOperation::Output => -i128::from(self.quantity.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_operation_names_parse() {
        assert_eq!(MovementOperation::parse("input"), Some(MovementOperation::Input));
        assert_eq!(MovementOperation::parse("output"), Some(MovementOperation::Output));
        assert_eq!(MovementOperation::parse("exchange"), None);
        assert_eq!(MovementOperation::parse("INPUT"), None);
        assert_eq!(MovementOperation::parse(""), None);
    }

    #[test]
    fn quantity_accepts_whole_positive_numbers() {
        assert_eq!(Quantity::from_number(1.0).map(|q| q.get()), Some(1));
        assert_eq!(Quantity::from_number(42.0).map(|q| q.get()), Some(42));
        assert_eq!(
            Quantity::from_number(MAX_QUANTITY as f64).map(|q| q.get()),
            Some(MAX_QUANTITY)
        );
    }

    #[test]
    fn quantity_rejects_zero_negative_fractional_and_non_finite() {
        let rejected = [
            0.0,
            -1.0,
            1.5,
            0.999,
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            1e300,
        ];
        for raw in rejected {
            assert_eq!(Quantity::from_number(raw), None, "{raw} should be rejected");
        }
        assert_eq!(Quantity::new(0), None);
    }

    #[test]
    fn input_deserializes_with_optional_fields_missing() {
        let input: StockMovementInput = serde_json::from_value(serde_json::json!({
            "item_id": "abc",
            "quantity": 5,
            "operation": "input",
        }))
        .unwrap();

        assert_eq!(input, StockMovementInput::new("abc", 5, "input"));
        assert_eq!(input.description, None);
    }

    #[test]
    fn wrongly_typed_fields_still_deserialize() {
        let input: StockMovementInput = serde_json::from_value(serde_json::json!({
            "item_id": 42,
            "quantity": "abc",
        }))
        .unwrap();

        assert_eq!(input.item_id, serde_json::json!(42));
        assert_eq!(input.operation, Value::Null);
        assert_eq!(Quantity::from_value(&input.quantity), None);
        assert_eq!(MovementOperation::from_value(&input.operation), None);
    }

    #[test]
    fn quantity_from_value_accepts_only_whole_positive_numbers() {
        use serde_json::json;

        assert_eq!(Quantity::from_value(&json!(3)).map(|q| q.get()), Some(3));
        assert_eq!(Quantity::from_value(&json!(3.0)).map(|q| q.get()), Some(3));
        for raw in [json!(0), json!(-1), json!(1.5), json!("3"), json!(null), json!([1])] {
            assert_eq!(Quantity::from_value(&raw), None, "{raw} should be rejected");
        }
    }

    #[test]
    fn operation_from_value_requires_a_string() {
        use serde_json::json;

        let output = MovementOperation::from_value(&json!("output"));
        assert_eq!(output, Some(MovementOperation::Output));
        assert_eq!(MovementOperation::from_value(&json!(5)), None);
        assert_eq!(MovementOperation::from_value(&json!(null)), None);
    }

    #[test]
    fn operation_serializes_lowercase() {
        let json = serde_json::to_value(MovementOperation::Output).unwrap();
        assert_eq!(json, serde_json::json!("output"));
    }
}
