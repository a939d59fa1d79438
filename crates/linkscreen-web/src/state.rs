use linkscreen_core::RecordStore;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub store: RecordStore,
}
