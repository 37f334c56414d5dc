//! Infrastructure layer: storage adapters for the inventory repositories.

pub mod store;


pub use store::InMemoryInventoryStore;
