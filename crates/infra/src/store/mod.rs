//! Storage adapters implementing the inventory repository traits.
//!
//! Items and their movement ledger live behind one adapter so a movement and
//! the stock change it causes commit together.

pub mod in_memory;

pub use in_memory::InMemoryInventoryStore;
