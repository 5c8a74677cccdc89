use std::collections::HashMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use smartrecipe_recipe::RecipeError;
use smartrecipe_user::UserError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Recipe error: {0}")]
    RecipeError(#[from] RecipeError),

    #[error("User error: {0}")]
    UserError(#[from] UserError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Validation failed")]
    ValidationFailed(HashMap<String, String>),

    #[error("Route not found")]
    RouteNotFound,
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string());
                (field.to_string(), message)
            })
            .collect();

        AppError::ValidationFailed(field_errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::RecipeError(RecipeError::InvalidQuery(_))
            | AppError::RecipeError(RecipeError::Validation(_))
            | AppError::UserError(UserError::InvalidRating { .. })
            | AppError::ValidationError(_)
            | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::RecipeError(RecipeError::NotFound(_))
            | AppError::RecipeError(RecipeError::NoRecipes)
            | AppError::UserError(UserError::ItemNotFound(_))
            | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::RecipeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::RecipeError(RecipeError::NotFound(_) | RecipeError::NoRecipes) => {
                json!({ "success": false, "error": "Recipe not found" })
            }
            AppError::ValidationFailed(details) => {
                tracing::warn!(errors = ?details, "Request validation failed");
                json!({ "success": false, "error": "Validation failed", "details": details })
            }
            err if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("Internal error: {}", err);
                json!({ "success": false, "error": "Internal server error" })
            }
            err => {
                tracing::warn!("Request rejected: {}", err);
                json!({ "success": false, "error": client_message(&err) })
            }
        };

        (status, Json(body)).into_response()
    }
}

fn client_message(err: &AppError) -> String {
    match err {
        AppError::RecipeError(RecipeError::InvalidQuery(msg))
        | AppError::RecipeError(RecipeError::Validation(msg))
        | AppError::ValidationError(msg) => msg.to_owned(),
        other => other.to_string(),
    }
}
