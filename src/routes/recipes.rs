use std::str::FromStr;

use chrono::NaiveDate;
use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use smartrecipe_recipe::{BrowseFilters, Difficulty, GenerateQuery, ScoringStrategy};
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::routes::{AppState, ListResponse};

/// POST /api/recipes/generate payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[validate(range(min = 1, message = "Must be greater than 0"))]
    #[serde(default)]
    pub max_cooking_time: Option<u32>,
    #[serde(default)]
    pub scoring: Option<ScoringStrategy>,
}

/// POST /api/recipes/filter payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[validate(range(min = 1, message = "Must be greater than 0"))]
    #[serde(default)]
    pub max_cooking_time: Option<u32>,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[validate(range(min = 0.0, message = "Must not be negative"))]
    #[serde(default)]
    pub max_calories: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct DailyParams {
    /// Calendar day as `YYYY-MM-DD`; today in local time when absent
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Empty strings from the browser client mean "any difficulty".
pub(crate) fn parse_difficulty(value: Option<&str>) -> Result<Option<Difficulty>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => Difficulty::from_str(name)
            .map(Some)
            .map_err(|_| AppError::ValidationError(format!("Unknown difficulty: {name}"))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// GET /api/recipes
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListResponse::new(state.store.recipes().to_vec()))
}

/// GET /api/recipes/{id}
pub async fn detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.get(id)?;

    Ok(Json(json!({ "success": true, "data": recipe })))
}

/// POST /api/recipes/generate
///
/// # Returns
/// - 200 OK: ranked recipes, best match first (possibly empty)
/// - 400 Bad Request: no ingredients, unknown difficulty or invalid time limit
#[tracing::instrument(skip(state, payload), fields(ingredients = payload.ingredients.len()))]
pub async fn generate(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let query = GenerateQuery {
        ingredients: payload.ingredients.clone(),
        dietary: payload.dietary.clone(),
        difficulty: parse_difficulty(payload.difficulty.as_deref())?,
        max_cooking_time: payload.max_cooking_time,
    };
    let strategy = payload.scoring.unwrap_or(state.scoring);

    let scored = smartrecipe_recipe::generate(&state.store, &query, strategy)?;

    tracing::info!(results = scored.len(), %strategy, "Recipes generated");

    Ok(Json(json!({
        "success": true,
        "total": scored.len(),
        "data": scored,
        "query": payload,
    })))
}

/// POST /api/recipes/filter
#[tracing::instrument(skip(state))]
pub async fn filter(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FilterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let filters = BrowseFilters {
        cuisine: non_blank(payload.cuisine.clone()),
        difficulty: parse_difficulty(payload.difficulty.as_deref())?,
        max_cooking_time: payload.max_cooking_time,
        dietary: payload.dietary.clone(),
        max_calories: payload.max_calories,
    };

    let recipes = smartrecipe_recipe::browse(&state.store, filters);

    Ok(Json(json!({
        "success": true,
        "total": recipes.len(),
        "data": recipes,
        "filters": payload,
    })))
}

/// GET /api/recipes/search?q=
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> impl IntoResponse {
    let recipes: Vec<_> = smartrecipe_recipe::search(&state.store, &params.q)
        .into_iter()
        .cloned()
        .collect();

    Json(ListResponse::new(recipes))
}

/// GET /api/recipes/daily?date=
///
/// # Returns
/// - 200 OK: the recipe of the day, identical for every call on that day
/// - 400 Bad Request: date is not `YYYY-MM-DD`
/// - 404 Not Found: the store holds no recipes
pub async fn daily(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DailyParams>,
) -> Result<impl IntoResponse, AppError> {
    let date = params
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let recipe = smartrecipe_recipe::daily(&state.store, date)?;

    Ok(Json(json!({ "success": true, "date": date, "data": recipe })))
}
