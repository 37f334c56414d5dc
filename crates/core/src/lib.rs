//! `stockflow-core` — domain foundation building blocks.
//!
//! Identifiers, the shared domain error and `Money`. Nothing here performs IO.

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{ItemId, StockMovementId};
pub use money::Money;
