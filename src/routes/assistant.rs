use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct SubstitutionRequest {
    #[serde(default)]
    pub ingredient: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    #[serde(default)]
    pub image_url: String,
}

/// POST /api/recipes/substitutions
pub async fn substitutions(
    AppJson(payload): AppJson<SubstitutionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let found = smartrecipe_recipe::substitutions_for(&payload.ingredient)?;

    Ok(Json(json!({
        "success": true,
        "ingredient": found.ingredient,
        "substitutions": found.substitutions,
    })))
}

/// POST /api/analyze-image
///
/// Backed by whatever [`smartrecipe_recipe::IngredientDetector`] the server
/// was started with. The default detector is a random placeholder.
#[tracing::instrument(skip_all)]
pub async fn analyze_image(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AnalyzeImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let detection = state.detector.detect(&payload.image_url)?;

    Ok(Json(json!({
        "success": true,
        "ingredients": detection.ingredients,
        "confidence": detection.confidence,
    })))
}
