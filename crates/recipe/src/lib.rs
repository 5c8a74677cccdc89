pub mod detector;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod query;
pub mod scorer;
pub mod store;
pub mod substitution;
pub mod types;

pub use detector::{Detection, IngredientDetector, RandomDetector};
pub use error::{RecipeError, RecipeResult};
pub use filter::{DietaryMatch, RecipeFilter};
pub use matcher::Pantry;
pub use query::{BrowseFilters, GenerateQuery, browse, daily, generate, nutrition, search};
pub use scorer::ScoringStrategy;
pub use store::RecipeStore;
pub use substitution::{Substitution, substitutions_for};
pub use types::{Difficulty, Nutrition, NutritionSummary, Recipe, ScoredRecipe};
