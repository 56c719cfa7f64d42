//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ItemRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence port for the items collection.
    pub items: Arc<dyn ItemRepository>,
}

impl HttpState {
    /// Construct state around an item repository implementation.
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}
