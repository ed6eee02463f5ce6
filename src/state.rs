use crate::config::Config;
use crate::store::PasteStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<PasteStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: PasteStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
