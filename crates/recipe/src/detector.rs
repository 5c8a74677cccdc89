//! Image-to-ingredient detection.
//!
//! Only a random placeholder exists today. It never looks at the image; it
//! samples a few entries from a fixed vocabulary so the upload flow can be
//! exercised end to end. A real model plugs in behind [`IngredientDetector`]
//! without touching the matching core.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{RecipeError, RecipeResult};

pub const COMMON_INGREDIENTS: &[&str] = &[
    "tomato", "onion", "garlic", "potato", "carrot", "chicken", "beef", "fish", "pasta", "rice",
    "eggs", "cheese", "milk", "butter", "oil",
];

const PLACEHOLDER_CONFIDENCE: f32 = 0.85;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Detection {
    pub ingredients: Vec<String>,
    pub confidence: f32,
}

pub trait IngredientDetector: Send + Sync {
    fn detect(&self, image_url: &str) -> RecipeResult<Detection>;
}

/// Placeholder detector returning 2 to 4 distinct random ingredients.
pub struct RandomDetector {
    rng: Mutex<StdRng>,
}

impl RandomDetector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientDetector for RandomDetector {
    fn detect(&self, image_url: &str) -> RecipeResult<Detection> {
        if image_url.trim().is_empty() {
            return Err(RecipeError::InvalidQuery("image url is required".to_string()));
        }

        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let count = rng.random_range(2..=4);
        let ingredients = COMMON_INGREDIENTS
            .choose_multiple(&mut *rng, count)
            .map(|s| s.to_string())
            .collect();

        tracing::debug!(count, "Placeholder detector sampled ingredients");

        Ok(Detection {
            ingredients,
            confidence: PLACEHOLDER_CONFIDENCE,
        })
    }
}
