use thiserror::Error;

use crate::repository::RepositoryError;

/// Why a stock movement was refused.
///
/// Closed set: callers match on every variant (the HTTP layer maps each to its
/// own status code). Every variant is raised before any write happens, except
/// `Conflict` and `Repository`, which come back from a refused or failed commit
/// that wrote nothing either.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockMovementError {
    /// The item id does not match any existing item.
    #[error("resource not found")]
    ResourceNotFound,

    /// Quantity is zero, negative or not a whole number.
    #[error("only natural numbers are allowed as quantity")]
    OnlyNaturalNumbers,

    /// Operation is neither "input" nor "output".
    #[error("invalid option: operation must be \"input\" or \"output\"")]
    InvalidOption,

    /// An output movement would drive stock below zero.
    #[error("stock cannot be negative")]
    StockCannotBeNegative,

    /// An input movement would overflow the stock counter.
    #[error("stock would overflow")]
    StockOverflow,

    /// Stock changed between the read and the commit; retry is safe.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Storage adapter failure.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for StockMovementError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Conflict { .. } => Self::Conflict(value.to_string()),
            RepositoryError::ItemNotFound(_) => Self::ResourceNotFound,
            other => Self::Repository(other),
        }
    }
}
