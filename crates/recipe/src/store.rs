use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::error::{RecipeError, RecipeResult};
use crate::types::Recipe;

const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// Immutable, in-memory recipe collection loaded once at startup.
///
/// The dietary and cuisine vocabularies are derived from the recipes at
/// construction time, so they always reflect the current recipe set.
#[derive(Clone, Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    dietary_options: Vec<String>,
    cuisines: Vec<String>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> RecipeResult<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());

        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(RecipeError::DuplicateId(recipe.id));
            }

            if recipe.ingredients.is_empty() {
                return Err(RecipeError::Validation(format!(
                    "recipe {} has no ingredients",
                    recipe.id
                )));
            }

            if recipe.ingredients.iter().any(|i| i.trim().is_empty()) {
                return Err(RecipeError::Validation(format!(
                    "recipe {} has a blank ingredient",
                    recipe.id
                )));
            }

            if recipe.servings < 1 {
                return Err(RecipeError::Validation(format!(
                    "recipe {} must serve at least one person",
                    recipe.id
                )));
            }

            if !recipe.nutrition.is_non_negative() {
                return Err(RecipeError::Validation(format!(
                    "recipe {} has negative nutrition values",
                    recipe.id
                )));
            }
        }

        let dietary_options = sorted_unique(recipes.iter().flat_map(|r| r.dietary.iter()));
        let cuisines = sorted_unique(recipes.iter().map(|r| &r.cuisine));

        Ok(Self {
            recipes,
            dietary_options,
            cuisines,
        })
    }

    pub fn from_json(json: &str) -> RecipeResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> RecipeResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_json(&json)?;

        tracing::info!(recipes = store.len(), "Recipe store loaded");

        Ok(store)
    }

    /// Store backed by the dataset compiled into the binary.
    pub fn bundled() -> RecipeResult<Self> {
        Self::from_json(BUNDLED_RECIPES)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: u32) -> RecipeResult<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or(RecipeError::NotFound(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn dietary_options(&self) -> &[String] {
        &self.dietary_options
    }

    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
