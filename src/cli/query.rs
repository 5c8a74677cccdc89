//! Offline queries against the configured recipe store, without a server.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::Args;
use smartrecipe_recipe::{BrowseFilters, Difficulty, GenerateQuery, ScoringStrategy};

use crate::config::Config;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Ingredient you have on hand (repeatable)
    #[arg(long = "ingredient", short = 'i', required = true)]
    pub ingredients: Vec<String>,

    /// Dietary tag every result must carry (repeatable)
    #[arg(long)]
    pub dietary: Vec<String>,

    /// Easy, Medium or Hard
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Maximum cooking time in minutes
    #[arg(long)]
    pub max_time: Option<u32>,

    /// percentage or match_count (defaults to match_count, the offline ranking)
    #[arg(long)]
    pub scoring: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BrowseArgs {
    #[arg(long)]
    pub cuisine: Option<String>,

    #[arg(long)]
    pub difficulty: Option<String>,

    #[arg(long)]
    pub max_time: Option<u32>,

    /// Dietary tag, any of which may match (repeatable)
    #[arg(long)]
    pub dietary: Vec<String>,

    #[arg(long)]
    pub max_calories: Option<f64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DailyArgs {
    /// Day as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

fn parse_difficulty(value: Option<&str>) -> Result<Option<Difficulty>> {
    value
        .map(|name| Difficulty::from_str(name).map_err(|_| anyhow!("Unknown difficulty: {name}")))
        .transpose()
}

/// Run generate and render the ranked results as pretty JSON.
pub fn generate(config: &Config, args: GenerateArgs) -> Result<String> {
    let store = crate::load_store(config)?;

    let strategy = match args.scoring.as_deref() {
        Some(name) => ScoringStrategy::from_str(name)
            .map_err(|_| anyhow!("Unknown scoring strategy: {name}"))?,
        None => ScoringStrategy::MatchCount,
    };

    let query = GenerateQuery {
        difficulty: parse_difficulty(args.difficulty.as_deref())?,
        ingredients: args.ingredients,
        dietary: args.dietary,
        max_cooking_time: args.max_time,
    };

    let scored = smartrecipe_recipe::generate(&store, &query, strategy)?;

    Ok(serde_json::to_string_pretty(&scored)?)
}

/// Run browse and render the matching recipes as pretty JSON.
pub fn browse(config: &Config, args: BrowseArgs) -> Result<String> {
    let store = crate::load_store(config)?;

    let filters = BrowseFilters {
        cuisine: args.cuisine,
        difficulty: parse_difficulty(args.difficulty.as_deref())?,
        max_cooking_time: args.max_time,
        dietary: args.dietary,
        max_calories: args.max_calories,
    };

    let recipes = smartrecipe_recipe::browse(&store, filters);

    Ok(serde_json::to_string_pretty(&recipes)?)
}

/// Print the recipe of the day as pretty JSON.
pub fn daily(config: &Config, args: DailyArgs) -> Result<String> {
    let store = crate::load_store(config)?;
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let recipe = smartrecipe_recipe::daily(&store, date)?;

    Ok(serde_json::to_string_pretty(recipe)?)
}
