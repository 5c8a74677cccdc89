use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use smartrecipe_recipe::Recipe;
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::routes::AppState;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub recipe_id: u32,
    #[validate(range(min = 1, max = 5, message = "Must be between 1 and 5"))]
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    pub recipe_id: u32,
    #[validate(range(min = 1, max = 5, message = "Must be between 1 and 5"))]
    pub rating: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DietaryRequest {
    pub dietary: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListRequest {
    pub recipe_id: u32,
}

/// POST /api/user/favorites
///
/// # Returns
/// - 200 OK: current favorites and ratings
/// - 400 Bad Request: rating outside 1..=5
/// - 404 Not Found: recipe id not in the store
#[tracing::instrument(skip(state))]
pub async fn save_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    state.store.get(payload.recipe_id)?;

    let prefs = state
        .preferences
        .save_favorite(payload.recipe_id, payload.rating)
        .await?;

    tracing::info!(recipe_id = payload.recipe_id, "Recipe saved to favorites");

    Ok(Json(json!({
        "success": true,
        "message": "Recipe saved",
        "saved": prefs.saved_recipes,
        "ratings": prefs.ratings,
    })))
}

/// DELETE /api/user/favorites/{id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<impl IntoResponse, AppError> {
    state.store.get(id)?;
    let removed = state.preferences.remove_favorite(id).await;
    let prefs = state.preferences.snapshot().await;

    Ok(Json(json!({
        "success": true,
        "removed": removed,
        "saved": prefs.saved_recipes,
    })))
}

/// POST /api/user/ratings
#[tracing::instrument(skip(state))]
pub async fn rate(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RatingRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    state.store.get(payload.recipe_id)?;

    state
        .preferences
        .rate(payload.recipe_id, payload.rating)
        .await?;
    let prefs = state.preferences.snapshot().await;

    Ok(Json(json!({ "success": true, "ratings": prefs.ratings })))
}

/// GET /api/user/preferences
///
/// Saved recipes are returned as full records, in store order.
pub async fn get_preferences(State(state): State<AppState>) -> impl IntoResponse {
    let prefs = state.preferences.snapshot().await;
    let favorites: Vec<&Recipe> = state
        .store
        .recipes()
        .iter()
        .filter(|r| prefs.saved_recipes.contains(&r.id))
        .collect();

    Json(json!({
        "success": true,
        "dietary": prefs.dietary,
        "savedRecipes": favorites,
        "ratings": prefs.ratings,
    }))
}

/// POST /api/user/dietary
pub async fn set_dietary(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DietaryRequest>,
) -> impl IntoResponse {
    let dietary = state.preferences.set_dietary(payload.dietary).await;

    Json(json!({
        "success": true,
        "message": "Dietary preferences updated",
        "dietary": dietary,
    }))
}

/// GET /api/user/shopping-list
pub async fn shopping_list(State(state): State<AppState>) -> impl IntoResponse {
    let prefs = state.preferences.snapshot().await;

    Json(json!({ "success": true, "items": prefs.shopping_list }))
}

/// POST /api/user/shopping-list
///
/// Appends every ingredient of the recipe as an unchecked item.
pub async fn add_to_shopping_list(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ShoppingListRequest>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.get(payload.recipe_id)?;

    let items = state
        .preferences
        .add_to_shopping_list(&recipe.name, &recipe.ingredients)
        .await;

    Ok(Json(json!({ "success": true, "items": items })))
}

/// POST /api/user/shopping-list/{id}/toggle
pub async fn toggle_shopping_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.preferences.toggle_shopping_item(id).await?;

    Ok(Json(json!({ "success": true, "item": item })))
}

/// DELETE /api/user/shopping-list
pub async fn clear_shopping_list(State(state): State<AppState>) -> impl IntoResponse {
    state.preferences.clear_shopping_list().await;

    Json(json!({ "success": true, "items": [] }))
}
