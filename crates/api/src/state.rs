use std::sync::Arc;

use cyberpark_core::controller::SlotController;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Slot operations over the configured store.
    pub controller: Arc<SlotController>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
