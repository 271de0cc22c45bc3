//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CodeSettings, LinkService, StatsService};
use crate::infrastructure::persistence::InMemoryMappingRepository;

/// Store backing the running service.
pub type Store = InMemoryMappingRepository;

/// State cloned into every request handler.
///
/// Both services share one store instance built by the composition root.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<Store>>,
    pub stats_service: Arc<StatsService<Store>>,
    /// Public origin for short URLs; `None` means "use the request origin".
    pub base_url: Option<String>,
}

impl AppState {
    /// Wires services around an existing store.
    pub fn new(store: Arc<Store>, settings: CodeSettings, base_url: Option<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone(), settings)),
            stats_service: Arc::new(StatsService::new(store)),
            base_url,
        }
    }

    /// Creates state over a fresh, empty store.
    pub fn in_memory(settings: CodeSettings, base_url: Option<String>) -> Self {
        Self::new(Arc::new(Store::new()), settings, base_url)
    }
}
