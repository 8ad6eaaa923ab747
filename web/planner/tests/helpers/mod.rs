use mealweek_recipe::Catalog;
use mealweek_storage::{MemoryStore, Persistence, StorageKeys};
use mealweek_web_planner::{Effect, FixedAnswer, Region, Widget, WidgetSettings};

pub fn widget(store: &MemoryStore, confirm: bool) -> anyhow::Result<Widget<MemoryStore>> {
    Ok(Widget::new(
        Catalog::embedded()?,
        Persistence::new(store.clone(), StorageKeys::default()),
        WidgetSettings::default(),
        FixedAnswer(confirm),
    ))
}

pub fn regions(effects: &[Effect]) -> Vec<Region> {
    effects.iter().filter_map(Effect::region).collect()
}

#[allow(dead_code)]
pub fn html(effects: &[Effect], region: Region) -> String {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Replace { region: r, html } if *r == region => Some(html.to_owned()),
            _ => None,
        })
        .unwrap_or_default()
}
