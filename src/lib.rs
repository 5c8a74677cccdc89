pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod observability;
pub mod routes;

use std::sync::Arc;

pub use config::Config;
pub use routes::AppState;

use smartrecipe_recipe::{RandomDetector, RecipeStore};
use smartrecipe_user::PreferencesStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Load the recipe store named by the configuration, or the bundled one.
pub fn load_store(config: &Config) -> anyhow::Result<RecipeStore> {
    let store = match &config.recipes.path {
        Some(path) => RecipeStore::load(path)?,
        None => RecipeStore::bundled()?,
    };

    Ok(store)
}

/// Build application state with a fresh preferences store and the
/// placeholder ingredient detector.
pub fn create_state(config: &Config) -> anyhow::Result<AppState> {
    let scoring = config
        .recipes
        .scoring_strategy()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(AppState {
        store: Arc::new(load_store(config)?),
        preferences: PreferencesStore::new(),
        detector: Arc::new(RandomDetector::new()),
        scoring,
    })
}

/// Create app router
///
/// Useful for integration testing without starting the full server.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
