use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// How a recipe's pantry coverage is turned into a ranking score.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// matched / total * 100, in [0, 100]
    #[default]
    Percentage,
    /// Raw number of matched recipe ingredients
    MatchCount,
}

impl ScoringStrategy {
    pub fn score(&self, matched: usize, total: usize) -> f64 {
        match self {
            ScoringStrategy::Percentage => {
                if total == 0 {
                    0.0
                } else {
                    matched as f64 / total as f64 * 100.0
                }
            }
            ScoringStrategy::MatchCount => matched as f64,
        }
    }
}

/// Stable sort by descending score. Equal scores keep their input order.
pub fn rank_by_score<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}
