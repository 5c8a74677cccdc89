//! Tests for configuration system

use smartrecipe::Config;
use smartrecipe_recipe::ScoringStrategy;
use temp_dir::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.child("smartrecipe.toml");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert!(config.recipes.path.is_none());
    assert_eq!(
        config.recipes.scoring_strategy().unwrap(),
        ScoringStrategy::Percentage
    );
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
host = "0.0.0.0"

[recipes]
path = "/srv/recipes.json"
scoring = "match_count"

[observability]
format = "json"
"#,
    );

    let config = Config::load(Some(path)).expect("Failed to load config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.recipes.path.as_deref(), Some("/srv/recipes.json"));
    assert_eq!(
        config.recipes.scoring_strategy().unwrap(),
        ScoringStrategy::MatchCount
    );
    assert_eq!(config.observability.format, "json");
    // Unset keys keep their defaults.
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_config_with_bad_values_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[recipes]
scoring = "fuzzy"
"#,
    );

    let config = Config::load(Some(path)).expect("Failed to load config");

    assert!(config.validate().is_err());
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let config = Config::load(Some("/nonexistent/smartrecipe.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.observability.format, "pretty");
}
