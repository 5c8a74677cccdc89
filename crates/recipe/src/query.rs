//! Query orchestration over a [`RecipeStore`] snapshot.
//!
//! All operations are pure functions of the store and the query: the same
//! inputs always produce the same ordered output and the store is never
//! mutated.

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::error::{RecipeError, RecipeResult};
use crate::filter::{DietaryMatch, RecipeFilter};
use crate::matcher::Pantry;
use crate::scorer::{ScoringStrategy, rank_by_score};
use crate::store::RecipeStore;
use crate::types::{Difficulty, NutritionSummary, Recipe, ScoredRecipe};

/// Pantry-driven recipe request.
#[derive(Clone, Debug, Default)]
pub struct GenerateQuery {
    pub ingredients: Vec<String>,
    pub dietary: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub max_cooking_time: Option<u32>,
}

/// Browse constraints, all optional.
#[derive(Clone, Debug, Default)]
pub struct BrowseFilters {
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub max_cooking_time: Option<u32>,
    pub dietary: Vec<String>,
    pub max_calories: Option<f64>,
}

impl From<BrowseFilters> for RecipeFilter {
    fn from(filters: BrowseFilters) -> Self {
        RecipeFilter {
            cuisine: filters.cuisine,
            difficulty: filters.difficulty,
            max_cooking_time: filters.max_cooking_time,
            dietary: filters.dietary,
            dietary_match: DietaryMatch::Any,
            max_calories: filters.max_calories,
        }
    }
}

/// Rank the recipes a pantry can (partly) cover.
///
/// Recipes with no matched ingredient are dropped, then dietary tags are
/// checked with [`DietaryMatch::All`] along with difficulty and cooking time.
/// The survivors are stably sorted by descending score, so recipes with equal
/// scores keep their store order.
#[tracing::instrument(skip(store, query), fields(ingredients = query.ingredients.len()))]
pub fn generate(
    store: &RecipeStore,
    query: &GenerateQuery,
    strategy: ScoringStrategy,
) -> RecipeResult<Vec<ScoredRecipe>> {
    let pantry = Pantry::new(&query.ingredients);
    if pantry.is_empty() {
        return Err(RecipeError::InvalidQuery(
            "at least one ingredient is required".to_string(),
        ));
    }

    let filter = RecipeFilter {
        cuisine: None,
        difficulty: query.difficulty,
        max_cooking_time: query.max_cooking_time,
        dietary: query.dietary.clone(),
        dietary_match: DietaryMatch::All,
        max_calories: None,
    };

    let mut scored: Vec<ScoredRecipe> = store
        .recipes()
        .iter()
        .filter_map(|recipe| {
            let matched = pantry.matched(&recipe.ingredients);
            if matched.is_empty() || !filter.accepts(recipe) {
                return None;
            }

            Some(ScoredRecipe {
                match_score: strategy.score(matched.len(), recipe.ingredients.len()),
                matching_ingredients: matched.into_iter().cloned().collect(),
                recipe: recipe.clone(),
            })
        })
        .collect();

    rank_by_score(&mut scored, |s| s.match_score);

    tracing::debug!(results = scored.len(), %strategy, "Generated recipe suggestions");

    Ok(scored)
}

/// Recipes passing the browse filters, in store order.
///
/// Dietary tags use [`DietaryMatch::Any`]. Empty filters return the whole
/// store.
#[tracing::instrument(skip_all)]
pub fn browse(store: &RecipeStore, filters: BrowseFilters) -> Vec<&Recipe> {
    let filter = RecipeFilter::from(filters);

    let recipes: Vec<&Recipe> = store
        .recipes()
        .iter()
        .filter(|recipe| filter.accepts(recipe))
        .collect();

    tracing::debug!(results = recipes.len(), "Browsed recipes");

    recipes
}

/// Case-insensitive free-text search over name, cuisine and tags.
pub fn search<'a>(store: &'a RecipeStore, text: &str) -> Vec<&'a Recipe> {
    let needle = text.trim().to_lowercase();

    store
        .recipes()
        .iter()
        .filter(|recipe| {
            recipe.name.to_lowercase().contains(&needle)
                || recipe.cuisine.to_lowercase().contains(&needle)
                || recipe
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Nutrition facts for the requested ids, in store order. Unknown ids are skipped.
pub fn nutrition(store: &RecipeStore, ids: &[u32]) -> Vec<NutritionSummary> {
    store
        .recipes()
        .iter()
        .filter(|recipe| ids.contains(&recipe.id))
        .map(|recipe| NutritionSummary {
            id: recipe.id,
            name: recipe.name.to_owned(),
            nutrition: recipe.nutrition.clone(),
            servings: recipe.servings,
        })
        .collect()
}

/// Recipe of the day: a pick seeded by the calendar date, so every call for
/// the same day returns the same recipe.
pub fn daily(store: &RecipeStore, date: NaiveDate) -> RecipeResult<&Recipe> {
    let seed = u64::from(date.num_days_from_ce().unsigned_abs());
    let mut rng = StdRng::seed_from_u64(seed);

    store.recipes().choose(&mut rng).ok_or(RecipeError::NoRecipes)
}
