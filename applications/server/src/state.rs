/// Shared application state
use roster_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }
}
