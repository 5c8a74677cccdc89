use smartrecipe_recipe::{
    BrowseFilters, Difficulty, GenerateQuery, Nutrition, Pantry, Recipe, RecipeError, RecipeStore,
    ScoringStrategy, browse, generate,
};

fn recipe(
    id: u32,
    ingredients: &[&str],
    dietary: &[&str],
    difficulty: Difficulty,
    cooking_time: u32,
) -> Recipe {
    Recipe {
        id,
        name: format!("Recipe {id}"),
        cuisine: "Fusion".to_string(),
        difficulty,
        cooking_time,
        servings: 2,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Cook.".to_string()],
        dietary: dietary.iter().map(|s| s.to_string()).collect(),
        nutrition: Nutrition {
            calories: 100.0 * id as f64,
            ..Nutrition::default()
        },
        image_url: None,
        tags: vec![],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn two_recipe_store() -> RecipeStore {
    RecipeStore::new(vec![
        recipe(1, &["chicken breast", "rice"], &[], Difficulty::Easy, 20),
        recipe(2, &["tofu", "soy sauce"], &["Vegan"], Difficulty::Medium, 30),
    ])
    .unwrap()
}

#[test]
fn test_generate_chicken_matches_chicken_breast_only() {
    let store = two_recipe_store();
    let query = GenerateQuery {
        ingredients: strings(&["chicken"]),
        ..GenerateQuery::default()
    };

    let results = generate(&store, &query, ScoringStrategy::Percentage).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipe.id, 1);
    assert_eq!(results[0].matching_ingredients, vec!["chicken breast"]);
    assert_eq!(results[0].match_score, 50.0);
}

#[test]
fn test_generate_empty_ingredients_is_invalid_query() {
    let store = two_recipe_store();

    let result = generate(&store, &GenerateQuery::default(), ScoringStrategy::Percentage);

    assert!(matches!(result, Err(RecipeError::InvalidQuery(_))));
}

#[test]
fn test_generate_no_matches_is_empty_success() {
    let store = two_recipe_store();
    let query = GenerateQuery {
        ingredients: strings(&["chocolate"]),
        ..GenerateQuery::default()
    };

    let results = generate(&store, &query, ScoringStrategy::Percentage).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_generate_results_always_share_a_match() {
    let store = RecipeStore::bundled().unwrap();
    let pantries = [
        strings(&["rice"]),
        strings(&["garlic", "lemon"]),
        strings(&["diced tomatoes", "beef"]),
        strings(&["cheese"]),
    ];

    for ingredients in pantries {
        let pantry = Pantry::new(&ingredients);
        let query = GenerateQuery {
            ingredients,
            ..GenerateQuery::default()
        };

        for scored in generate(&store, &query, ScoringStrategy::Percentage).unwrap() {
            assert!(
                scored.recipe.ingredients.iter().any(|i| pantry.matches(i)),
                "recipe {} returned without a matching ingredient",
                scored.recipe.id
            );
            assert!((0.0..=100.0).contains(&scored.match_score));
        }
    }
}

#[test]
fn test_generate_ties_keep_store_order() {
    // 2 of 4 and 1 of 2 both score 50.
    let store = RecipeStore::new(vec![
        recipe(1, &["rice", "beans", "salt", "pepper"], &[], Difficulty::Easy, 10),
        recipe(2, &["pasta", "basil"], &[], Difficulty::Easy, 10),
        recipe(3, &["rice", "beans", "pasta", "corn"], &[], Difficulty::Easy, 10),
        recipe(4, &["basil", "rice"], &[], Difficulty::Easy, 10),
    ])
    .unwrap();

    let query = GenerateQuery {
        ingredients: strings(&["rice", "beans", "pasta"]),
        ..GenerateQuery::default()
    };

    let results = generate(&store, &query, ScoringStrategy::Percentage).unwrap();
    let order: Vec<(u32, f64)> = results
        .iter()
        .map(|s| (s.recipe.id, s.match_score))
        .collect();

    assert_eq!(order, vec![(3, 75.0), (1, 50.0), (2, 50.0), (4, 50.0)]);
}

#[test]
fn test_generate_dietary_is_match_all() {
    let store = RecipeStore::new(vec![
        recipe(1, &["chicken"], &["Vegan"], Difficulty::Easy, 10),
        recipe(2, &["chicken"], &["GlutenFree"], Difficulty::Easy, 10),
        recipe(3, &["chicken"], &["Vegan", "GlutenFree"], Difficulty::Easy, 10),
        recipe(4, &["chicken"], &[], Difficulty::Easy, 10),
    ])
    .unwrap();

    let query = GenerateQuery {
        ingredients: strings(&["chicken"]),
        dietary: strings(&["Vegan", "GlutenFree"]),
        ..GenerateQuery::default()
    };

    let ids: Vec<u32> = generate(&store, &query, ScoringStrategy::Percentage)
        .unwrap()
        .iter()
        .map(|s| s.recipe.id)
        .collect();

    assert_eq!(ids, vec![3]);
}

#[test]
fn test_generate_difficulty_and_time_limits() {
    let store = RecipeStore::new(vec![
        recipe(1, &["rice"], &[], Difficulty::Easy, 30),
        recipe(2, &["rice"], &[], Difficulty::Easy, 31),
        recipe(3, &["rice"], &[], Difficulty::Hard, 10),
    ])
    .unwrap();

    let query = GenerateQuery {
        ingredients: strings(&["rice"]),
        difficulty: Some(Difficulty::Easy),
        max_cooking_time: Some(30),
        ..GenerateQuery::default()
    };

    let ids: Vec<u32> = generate(&store, &query, ScoringStrategy::MatchCount)
        .unwrap()
        .iter()
        .map(|s| s.recipe.id)
        .collect();

    assert_eq!(ids, vec![1]);
}

#[test]
fn test_browse_without_filters_returns_whole_store() {
    let store = RecipeStore::bundled().unwrap();

    let results = browse(&store, BrowseFilters::default());

    assert_eq!(results.len(), store.len());
    let ids: Vec<u32> = results.iter().map(|r| r.id).collect();
    let store_ids: Vec<u32> = store.recipes().iter().map(|r| r.id).collect();
    assert_eq!(ids, store_ids);
}

#[test]
fn test_browse_dietary_is_match_any() {
    let store = RecipeStore::new(vec![
        recipe(1, &["tofu"], &["Vegan"], Difficulty::Easy, 10),
        recipe(2, &["bread"], &["Halal"], Difficulty::Easy, 10),
    ])
    .unwrap();

    let filters = BrowseFilters {
        dietary: strings(&["Vegan", "GlutenFree"]),
        ..BrowseFilters::default()
    };

    let ids: Vec<u32> = browse(&store, filters).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_browse_combines_filters() {
    let mut thai = recipe(3, &["noodles"], &["Vegan"], Difficulty::Medium, 25);
    thai.cuisine = "Thai".to_string();
    let store = RecipeStore::new(vec![
        recipe(1, &["rice"], &["Vegan"], Difficulty::Medium, 25),
        recipe(2, &["rice"], &["Vegan"], Difficulty::Medium, 25),
        thai,
    ])
    .unwrap();

    let filters = BrowseFilters {
        cuisine: Some("fusion".to_string()),
        difficulty: Some(Difficulty::Medium),
        max_cooking_time: Some(25),
        dietary: strings(&["Vegan"]),
        max_calories: Some(150.0),
    };

    let ids: Vec<u32> = browse(&store, filters).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_load_from_file() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("recipes.json");
    std::fs::write(
        &path,
        r#"[{"id":9,"name":"Porridge","cuisine":"Scottish","difficulty":"Easy","cookingTime":10,"servings":1,"ingredients":["oats","milk"],"dietary":["Vegetarian"]}]"#,
    )
    .unwrap();

    let store = RecipeStore::load(&path).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.dietary_options(), &["Vegetarian".to_string()]);
    assert!(matches!(
        RecipeStore::load(dir.child("missing.json")),
        Err(RecipeError::Io(_))
    ));
}
