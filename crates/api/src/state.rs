use std::sync::Arc;

use folio_store::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The catalog is
/// constructed once at startup and injected here; nothing references it as
/// ambient global state.
#[derive(Clone)]
pub struct AppState {
    /// The catalog store, selected by `STORE_BACKEND`.
    pub catalog: Arc<dyn Catalog>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
