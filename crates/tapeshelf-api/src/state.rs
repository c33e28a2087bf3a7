//! Application state and sub-state extractors.
//!
//! Handlers extract only the part of `AppState` they need via Axum's `FromRef`.

use std::sync::Arc;
use tapeshelf_core::Config;
use tapeshelf_db::Database;
use tapeshelf_storage::UploadStore;

/// Upload directory shared by the upload handler and the static file service.
#[derive(Clone)]
pub struct UploadState {
    pub store: UploadStore,
}

/// Database collaborator used by the diagnostic route.
#[derive(Clone)]
pub struct DbState {
    pub database: Arc<dyn Database>,
}

// ----- AppState -----

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub uploads: UploadState,
    pub db: DbState,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, store: UploadStore, database: Arc<dyn Database>) -> Self {
        Self {
            uploads: UploadState { store },
            db: DbState { database },
            config,
        }
    }
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for UploadState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.uploads.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
