use std::sync::Arc;

use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use smartrecipe_recipe::{IngredientDetector, RecipeStore, ScoringStrategy};
use smartrecipe_user::PreferencesStore;

use crate::error::AppError;

mod assistant;
mod catalog;
mod health;
mod preferences;
mod recipes;

pub use assistant::{AnalyzeImageRequest, SubstitutionRequest};
pub use preferences::{DietaryRequest, FavoriteRequest, RatingRequest, ShoppingListRequest};
pub use recipes::{FilterRequest, GenerateRequest};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecipeStore>,
    pub preferences: PreferencesStore,
    pub detector: Arc<dyn IngredientDetector>,
    pub scoring: ScoringStrategy,
}

/// `{ "success": true, "data": [...], "total": n }`
#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            total: data.len(),
            data,
        }
    }
}

pub async fn fallback() -> impl IntoResponse {
    AppError::RouteNotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/recipes", get(recipes::list))
        .route("/api/recipes/generate", post(recipes::generate))
        .route("/api/recipes/filter", post(recipes::filter))
        .route("/api/recipes/search", get(recipes::search))
        .route("/api/recipes/daily", get(recipes::daily))
        .route("/api/recipes/substitutions", post(assistant::substitutions))
        .route("/api/recipes/{id}", get(recipes::detail))
        .route("/api/analyze-image", post(assistant::analyze_image))
        .route("/api/nutrition", post(catalog::nutrition))
        .route("/api/cuisines", get(catalog::cuisines))
        .route("/api/dietary-options", get(catalog::dietary_options))
        .route("/api/user/favorites", post(preferences::save_favorite))
        .route(
            "/api/user/favorites/{id}",
            axum::routing::delete(preferences::remove_favorite),
        )
        .route("/api/user/ratings", post(preferences::rate))
        .route("/api/user/preferences", get(preferences::get_preferences))
        .route("/api/user/dietary", post(preferences::set_dietary))
        .route(
            "/api/user/shopping-list",
            get(preferences::shopping_list)
                .post(preferences::add_to_shopping_list)
                .delete(preferences::clear_shopping_list),
        )
        .route(
            "/api/user/shopping-list/{id}/toggle",
            post(preferences::toggle_shopping_item),
        )
        .fallback(fallback)
        .with_state(app_state)
}
