use std::sync::Arc;

use stockflow_infra::InMemoryInventoryStore;
use stockflow_inventory::{ItemService, StockUseCase};

type Store = Arc<InMemoryInventoryStore>;

/// Use cases shared by all handlers.
pub struct AppServices {
    pub stock: StockUseCase<Store, Store>,
    pub items: ItemService<Store, Store>,
}

impl AppServices {
    /// Wire both use cases over one in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryInventoryStore::new()))
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            stock: StockUseCase::new(store.clone(), store.clone()),
            items: ItemService::new(store.clone(), store),
        }
    }
}
