use thiserror::Error;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Recipe not found: {0}")]
    NotFound(u32),

    #[error("Recipe store is empty")]
    NoRecipes,

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to parse recipe dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read recipe dataset: {0}")]
    Io(#[from] std::io::Error),
}
