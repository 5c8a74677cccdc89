use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub id: u64,
    pub ingredient: String,
    pub recipe: String,
    pub checked: bool,
}

/// Point-in-time copy of the stored preferences.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub dietary: Vec<String>,
    pub saved_recipes: Vec<u32>,
    pub ratings: BTreeMap<u32, u8>,
    pub shopping_list: Vec<ShoppingItem>,
}

#[derive(Default)]
struct Inner {
    prefs: Preferences,
    next_item_id: u64,
}

/// In-memory favorites, ratings, dietary preferences and shopping list.
///
/// Cloning shares the same underlying state. All writes go through a single
/// `RwLock`, so concurrent requests observe whole updates only. Nothing
/// survives a restart.
#[derive(Clone, Default)]
pub struct PreferencesStore {
    inner: Arc<RwLock<Inner>>,
}

impl PreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Preferences {
        self.inner.read().await.prefs.clone()
    }

    /// Add a favorite, optionally rating it in the same step.
    ///
    /// Saving an existing favorite again keeps its original position.
    pub async fn save_favorite(&self, recipe_id: u32, rating: Option<u8>) -> UserResult<Preferences> {
        if let Some(rating) = rating {
            validate_rating(rating)?;
        }

        let mut inner = self.inner.write().await;
        if !inner.prefs.saved_recipes.contains(&recipe_id) {
            inner.prefs.saved_recipes.push(recipe_id);
        }
        if let Some(rating) = rating {
            inner.prefs.ratings.insert(recipe_id, rating);
        }

        tracing::debug!(recipe_id, "Favorite saved");

        Ok(inner.prefs.clone())
    }

    /// Returns false when the recipe was not a favorite.
    pub async fn remove_favorite(&self, recipe_id: u32) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.prefs.saved_recipes.len();
        inner.prefs.saved_recipes.retain(|id| *id != recipe_id);

        inner.prefs.saved_recipes.len() != before
    }

    pub async fn rate(&self, recipe_id: u32, rating: u8) -> UserResult<()> {
        validate_rating(rating)?;

        self.inner
            .write()
            .await
            .prefs
            .ratings
            .insert(recipe_id, rating);

        Ok(())
    }

    pub async fn set_dietary(&self, dietary: Vec<String>) -> Vec<String> {
        let mut inner = self.inner.write().await;
        inner.prefs.dietary = dietary;
        inner.prefs.dietary.clone()
    }

    /// Append one unchecked item per ingredient, tagged with the recipe name.
    pub async fn add_to_shopping_list(
        &self,
        recipe_name: &str,
        ingredients: &[String],
    ) -> Vec<ShoppingItem> {
        let mut inner = self.inner.write().await;

        for ingredient in ingredients {
            inner.next_item_id += 1;
            let item = ShoppingItem {
                id: inner.next_item_id,
                ingredient: ingredient.to_owned(),
                recipe: recipe_name.to_owned(),
                checked: false,
            };
            inner.prefs.shopping_list.push(item);
        }

        inner.prefs.shopping_list.clone()
    }

    pub async fn toggle_shopping_item(&self, item_id: u64) -> UserResult<ShoppingItem> {
        let mut inner = self.inner.write().await;
        let item = inner
            .prefs
            .shopping_list
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(UserError::ItemNotFound(item_id))?;

        item.checked = !item.checked;

        Ok(item.clone())
    }

    pub async fn clear_shopping_list(&self) {
        self.inner.write().await.prefs.shopping_list.clear();
    }
}

fn validate_rating(rating: u8) -> UserResult<()> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(UserError::InvalidRating {
            got: rating,
            min: MIN_RATING,
            max: MAX_RATING,
        })
    }
}
