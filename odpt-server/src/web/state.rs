//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state.
///
/// The catalog is loaded once at startup and only read afterwards. Search
/// state is per request, so nothing mutable is shared between users.
pub struct AppState<L> {
    /// Session catalog
    pub catalog: Arc<Catalog>,

    /// Disruption and fare lookups
    pub lookup: Arc<L>,
}

impl<L> AppState<L> {
    /// Create a new app state.
    pub fn new(catalog: Catalog, lookup: L) -> Self {
        Self {
            catalog: Arc::new(catalog),
            lookup: Arc::new(lookup),
        }
    }
}

impl<L> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            lookup: Arc::clone(&self.lookup),
        }
    }
}
