//! HTTP surface of the pet adoption service.
//!
//! Server-rendered pages over the pets collection: list, add, view/adopt and
//! delete. The store handle and the template environment are created once and
//! shared with every handler through [`AppState`].

mod config;
mod error;
mod handlers;
mod views;

pub use config::Config;
pub use error::AppError;
pub use views::Views;

use axum::{
    Router,
    routing::{get, post},
};
use petstore_storage::{PetStore, StorageResult};
use std::{path::Path, sync::Arc};
use tracing::{error, info};

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PetStore>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(store: PetStore, views: Views) -> Self {
        Self {
            store: Arc::new(store),
            views: Arc::new(views),
        }
    }

    /// Runs a store call on the blocking pool so DuckDB I/O and the
    /// connection lock never hold up a runtime worker.
    pub async fn with_store<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&PetStore) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        Ok(tokio::task::spawn_blocking(move || f(&store)).await??)
    }
}

/// Build the HTTP router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/pets", get(handlers::show_pets))
        .route("/add_pets", get(handlers::add_pet_form).post(handlers::add_pet))
        .route("/adopt/{id}", get(handlers::view_pet).post(handlers::adopt_pet))
        .route("/delete_pet/{id}", post(handlers::delete_pet))
        .with_state(state)
}

/// Open and ping the store at `path`.
///
/// A failure is logged and yields a disconnected store so the service still
/// starts; requests that reach the store then fail individually.
pub fn connect_store(path: &Path) -> PetStore {
    let opened = PetStore::open(path).and_then(|store| store.ping().map(|()| store));
    match opened {
        Ok(store) => {
            info!("Connected to pet store at {}", path.display());
            store
        }
        Err(e) => {
            error!("Error connecting to pet store at {}: {}", path.display(), e);
            PetStore::disconnected(e.to_string())
        }
    }
}
