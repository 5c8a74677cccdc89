use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::extract::AppJson;
use crate::routes::{AppState, ListResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRequest {
    pub recipe_ids: Vec<u32>,
}

/// POST /api/nutrition
pub async fn nutrition(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NutritionRequest>,
) -> impl IntoResponse {
    let summaries = smartrecipe_recipe::nutrition(&state.store, &payload.recipe_ids);

    Json(ListResponse::new(summaries))
}

/// GET /api/cuisines
pub async fn cuisines(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "success": true, "cuisines": state.store.cuisines() }))
}

/// GET /api/dietary-options
pub async fn dietary_options(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "success": true, "options": state.store.dietary_options() }))
}
