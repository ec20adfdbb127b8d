use crate::store::EntryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
}

impl AppState {
    pub fn new(store: EntryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
