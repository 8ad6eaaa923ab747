//! Tests for configuration system

use mealweek::Config;

#[test]
fn test_config_loads_defaults() {
    let config =
        Config::load_with_env(None, Some(config::Map::new())).expect("Failed to load config");

    assert_eq!(config.storage.plan_key, "rfmp.plan.v1");
    assert_eq!(config.storage.favorites_key, "rfmp.favs.v1");
    assert_eq!(config.catalog.quick_threshold_minutes, 25);
    assert_eq!(config.ui.list_id, "list");
    assert_eq!(config.ui.plan_id, "planTable");
    assert_eq!(config.ui.favorites_id, "favs");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_document_overrides_defaults() {
    let toml = r#"
        [storage]
        plan_key = "planner.plan"

        [catalog]
        quick_threshold_minutes = 15

        [ui]
        confirm_reset_message = "Start over?"
    "#;

    let config = Config::load_with_env(Some(toml), Some(config::Map::new()))
        .expect("Failed to load config");

    assert_eq!(config.storage.plan_key, "planner.plan");
    assert_eq!(config.storage.favorites_key, "rfmp.favs.v1");
    assert_eq!(config.catalog.quick_threshold_minutes, 15);
    assert_eq!(config.ui.confirm_reset_message, "Start over?");
    assert_eq!(config.ui.search_id, "q");
}

#[test]
fn test_environment_wins_over_toml() {
    let mut env = config::Map::new();
    env.insert(
        "MEALWEEK__CATALOG__QUICK_THRESHOLD_MINUTES".to_string(),
        "40".to_string(),
    );
    env.insert("MEALWEEK__LOGGING__LEVEL".to_string(), "debug".to_string());

    let toml = "[catalog]\nquick_threshold_minutes = 15\n";
    let config = Config::load_with_env(Some(toml), Some(env)).expect("Failed to load config");

    assert_eq!(config.catalog.quick_threshold_minutes, 40);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_malformed_toml_is_an_error() {
    assert!(Config::load_with_env(Some("[storage"), Some(config::Map::new())).is_err());
}
