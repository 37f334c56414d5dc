//! Inventory domain module.
//!
//! Business rules for items and their stock movement ledger, implemented as
//! deterministic domain logic behind repository traits (no HTTP, no storage).

pub mod error;
pub mod item;
pub mod ledger;
pub mod movement;
pub mod repository;
pub mod service;
pub mod use_case;
pub mod validator;

pub use error::StockMovementError;
pub use item::Item;
pub use ledger::Reconciliation;
pub use movement::{
    MovementOperation, NewStockMovement, Quantity, StockMovement, StockMovementInput,
    StockTransition,
};
pub use repository::{ItemRepository, RepositoryError, StockMovementRepository};
pub use service::{ItemService, ItemServiceError, NewItem};
pub use use_case::{StockMovementOutcome, StockUseCase};
pub use validator::{StockMovementValidator, ValidatedMovement};
