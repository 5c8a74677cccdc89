use serde::Serialize;

use crate::error::{RecipeError, RecipeResult};
use crate::matcher::contains_either_way;

pub const FALLBACK_SUGGESTION: &str = "Consider alternatives based on dietary needs";

const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("butter", &["oil", "coconut oil", "applesauce"]),
    ("milk", &["almond milk", "coconut milk", "oat milk"]),
    ("eggs", &["flax eggs", "chia eggs", "applesauce"]),
    ("sugar", &["honey", "agave", "stevia"]),
    ("wheat flour", &["almond flour", "coconut flour", "rice flour"]),
    ("chicken", &["tofu", "tempeh", "seitan", "beans"]),
    ("beef", &["turkey", "lamb", "plant-based meat"]),
    ("cheese", &["nutritional yeast", "cashew cheese"]),
    ("sour cream", &["greek yogurt", "coconut cream"]),
    ("salt", &["low-sodium salt", "herbs", "spices"]),
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Substitution {
    pub ingredient: String,
    pub substitutions: Vec<String>,
}

/// Look up replacements for an ingredient.
///
/// Keys are matched with the same bidirectional containment as the pantry
/// matcher; the first key in table order wins. Unknown ingredients get the
/// generic fallback suggestion.
pub fn substitutions_for(ingredient: &str) -> RecipeResult<Substitution> {
    let needle = ingredient.trim().to_lowercase();
    if needle.is_empty() {
        return Err(RecipeError::InvalidQuery("ingredient is required".to_string()));
    }

    let found = SUBSTITUTIONS
        .iter()
        .find(|(key, _)| contains_either_way(key, &needle));

    Ok(match found {
        Some((key, options)) => Substitution {
            ingredient: key.to_string(),
            substitutions: options.iter().map(|s| s.to_string()).collect(),
        },
        None => Substitution {
            ingredient: ingredient.to_string(),
            substitutions: vec![FALLBACK_SUGGESTION.to_string()],
        },
    })
}
