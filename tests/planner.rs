//! End-to-end planner behaviour over an in-memory store

use mealweek::{AppError, Config, build_widget};
use mealweek_shared::{Day, FilterMode};
use mealweek_storage::{MemoryStore, WeeklyPlan};
use mealweek_web_planner::{Action, FixedAnswer, Region, Widget};

fn planner(store: &MemoryStore, config: &Config) -> anyhow::Result<Widget<MemoryStore>> {
    Ok(build_widget(config, store.clone(), FixedAnswer(true))?)
}

fn default_config() -> anyhow::Result<Config> {
    Ok(Config::load_with_env(None, Some(config::Map::new()))?)
}

#[test]
fn invalid_config_is_rejected() -> anyhow::Result<()> {
    let mut config = default_config()?;
    config.storage.favorites_key = config.storage.plan_key.clone();

    let result = build_widget(&config, MemoryStore::new(), FixedAnswer(true));

    assert!(matches!(result, Err(AppError::InvalidConfig(_))));

    Ok(())
}

#[test]
fn configured_keys_are_used_for_documents() -> anyhow::Result<()> {
    let config = Config::load_with_env(
        Some("[storage]\nplan_key = \"p\"\nfavorites_key = \"f\"\n"),
        Some(config::Map::new()),
    )?;
    let store = MemoryStore::new();
    let mut widget = planner(&store, &config)?;

    widget.dispatch(Action::ToggleFavorite("r1".to_owned()))?;
    widget.dispatch(Action::Assign {
        recipe_id: "r1".to_owned(),
        day: Some(Day::Fri),
    })?;

    assert_eq!(store.keys(), ["f", "p"]);

    Ok(())
}

#[test]
fn configured_quick_threshold_drives_filter() -> anyhow::Result<()> {
    let config = Config::load_with_env(
        Some("[catalog]\nquick_threshold_minutes = 12\n"),
        Some(config::Map::new()),
    )?;
    let store = MemoryStore::new();
    let mut widget = planner(&store, &config)?;

    widget.dispatch(Action::Filter(FilterMode::Quick))?;

    let visible = widget.visible();
    let ids = visible.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["r3"]);

    Ok(())
}

#[test]
fn week_of_planning_then_reset() -> anyhow::Result<()> {
    let config = default_config()?;
    let store = MemoryStore::new();
    let mut widget = planner(&store, &config)?;

    for (day, recipe_id) in [(Day::Mon, "r1"), (Day::Wed, "r3"), (Day::Sun, "r5")] {
        widget.dispatch(Action::Assign {
            recipe_id: recipe_id.to_owned(),
            day: Some(day),
        })?;
    }
    widget.dispatch(Action::ToggleFavorite("r1".to_owned()))?;
    widget.dispatch(Action::ToggleFavorite("r4".to_owned()))?;
    widget.dispatch(Action::RemoveFavorite("r1".to_owned()))?;

    let plan = widget.persistence().load_plan();
    assert_eq!(plan.get(Day::Wed), Some("r3"));
    assert_eq!(plan.iter().filter(|(_, id)| id.is_some()).count(), 3);
    assert_eq!(
        widget.persistence().load_favorites().iter().collect::<Vec<_>>(),
        ["r4"]
    );

    // a fresh planner on the same store sees the same state
    let reopened = planner(&store, &config)?;
    assert_eq!(reopened.persistence().load_plan(), plan);

    let effects = widget.dispatch(Action::Reset)?;
    assert_eq!(effects.len(), 3);
    assert_eq!(widget.persistence().load_plan(), WeeklyPlan::default());
    assert!(widget.persistence().load_favorites().is_empty());

    Ok(())
}

#[test]
fn corrupt_storage_renders_empty_state() -> anyhow::Result<()> {
    use mealweek_storage::KeyValueStore;

    let config = default_config()?;
    let store = MemoryStore::new();
    store.set("rfmp.plan.v1", "{\"Mon\": ")?;
    store.set("rfmp.favs.v1", "\"r1\"")?;
    let widget = planner(&store, &config)?;

    let effects = widget.render_all()?;

    let html = |region: Region| {
        effects
            .iter()
            .find_map(|e| match e {
                mealweek_web_planner::Effect::Replace { region: r, html } if *r == region => {
                    Some(html.as_str())
                }
                _ => None,
            })
            .unwrap_or_default()
    };
    assert_eq!(html(Region::PlanTable).matches(">Empty<").count(), 7);
    assert!(html(Region::Favorites).contains("No favorites yet."));
    assert!(!html(Region::RecipeList).contains("aria-pressed=\"true\""));

    Ok(())
}
