use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::types::{Difficulty, Recipe};

/// How requested dietary tags are checked against a recipe's tags.
#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DietaryMatch {
    /// Recipe must carry every requested tag.
    All,
    /// Recipe must carry at least one requested tag.
    Any,
}

impl DietaryMatch {
    pub fn satisfied_by(&self, recipe: &Recipe, requested: &[String]) -> bool {
        if requested.is_empty() {
            return true;
        }

        match self {
            DietaryMatch::All => requested.iter().all(|tag| recipe.has_dietary_tag(tag)),
            DietaryMatch::Any => requested.iter().any(|tag| recipe.has_dietary_tag(tag)),
        }
    }
}

/// Composable recipe constraints. Every `None`/empty field is "no constraint";
/// set fields are AND-combined, so evaluation order does not matter.
#[derive(Clone, Debug)]
pub struct RecipeFilter {
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub max_cooking_time: Option<u32>,
    pub dietary: Vec<String>,
    pub dietary_match: DietaryMatch,
    pub max_calories: Option<f64>,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        Self {
            cuisine: None,
            difficulty: None,
            max_cooking_time: None,
            dietary: Vec::new(),
            dietary_match: DietaryMatch::Any,
            max_calories: None,
        }
    }
}

impl RecipeFilter {
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        self.cuisine_ok(recipe)
            && self.difficulty.is_none_or(|d| recipe.difficulty == d)
            && self
                .max_cooking_time
                .is_none_or(|max| recipe.cooking_time <= max)
            && self.dietary_match.satisfied_by(recipe, &self.dietary)
            && self
                .max_calories
                .is_none_or(|max| recipe.nutrition.calories <= max)
    }

    fn cuisine_ok(&self, recipe: &Recipe) -> bool {
        match &self.cuisine {
            Some(cuisine) => recipe.cuisine.to_lowercase() == cuisine.to_lowercase(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Nutrition;

    fn recipe(dietary: &[&str]) -> Recipe {
        Recipe {
            id: 1,
            name: "Curry".to_string(),
            cuisine: "Indian".to_string(),
            difficulty: Difficulty::Medium,
            cooking_time: 30,
            servings: 4,
            ingredients: vec!["chickpeas".to_string()],
            instructions: vec![],
            dietary: dietary.iter().map(|s| s.to_string()).collect(),
            nutrition: Nutrition {
                calories: 480.0,
                ..Nutrition::default()
            },
            image_url: None,
            tags: vec![],
        }
    }

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        assert!(RecipeFilter::default().accepts(&recipe(&[])));
    }

    #[test]
    fn test_dietary_match_all_requires_every_tag() {
        let requested = tags(&["Vegan", "Gluten-Free"]);

        assert!(DietaryMatch::All.satisfied_by(&recipe(&["Vegan", "Gluten-Free", "Halal"]), &requested));
        assert!(!DietaryMatch::All.satisfied_by(&recipe(&["Vegan"]), &requested));
    }

    #[test]
    fn test_dietary_match_any_requires_one_tag() {
        let requested = tags(&["Vegan", "Gluten-Free"]);

        assert!(DietaryMatch::Any.satisfied_by(&recipe(&["Vegan"]), &requested));
        assert!(!DietaryMatch::Any.satisfied_by(&recipe(&["Halal"]), &requested));
        assert!(!DietaryMatch::Any.satisfied_by(&recipe(&[]), &requested));
    }

    #[test]
    fn test_empty_dietary_request_is_unconstrained() {
        assert!(DietaryMatch::All.satisfied_by(&recipe(&[]), &[]));
        assert!(DietaryMatch::Any.satisfied_by(&recipe(&[]), &[]));
    }

    #[test]
    fn test_cuisine_is_case_insensitive() {
        let filter = RecipeFilter {
            cuisine: Some("indian".to_string()),
            ..RecipeFilter::default()
        };
        assert!(filter.accepts(&recipe(&[])));

        let filter = RecipeFilter {
            cuisine: Some("Thai".to_string()),
            ..RecipeFilter::default()
        };
        assert!(!filter.accepts(&recipe(&[])));
    }

    #[test]
    fn test_cooking_time_limit_is_inclusive() {
        let at_limit = RecipeFilter {
            max_cooking_time: Some(30),
            ..RecipeFilter::default()
        };
        let below = RecipeFilter {
            max_cooking_time: Some(29),
            ..RecipeFilter::default()
        };

        assert!(at_limit.accepts(&recipe(&[])));
        assert!(!below.accepts(&recipe(&[])));
    }

    #[test]
    fn test_calorie_limit_is_inclusive() {
        let filter = RecipeFilter {
            max_calories: Some(480.0),
            ..RecipeFilter::default()
        };
        assert!(filter.accepts(&recipe(&[])));

        let filter = RecipeFilter {
            max_calories: Some(479.5),
            ..RecipeFilter::default()
        };
        assert!(!filter.accepts(&recipe(&[])));
    }

    #[test]
    fn test_difficulty_exact_match() {
        let filter = RecipeFilter {
            difficulty: Some(Difficulty::Medium),
            ..RecipeFilter::default()
        };
        assert!(filter.accepts(&recipe(&[])));

        let filter = RecipeFilter {
            difficulty: Some(Difficulty::Easy),
            ..RecipeFilter::default()
        };
        assert!(!filter.accepts(&recipe(&[])));
    }
}
