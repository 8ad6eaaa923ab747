pub mod config;
pub mod error;
pub mod observability;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use config::Config;
pub use error::AppError;

use mealweek_recipe::Catalog;
use mealweek_storage::{KeyValueStore, Persistence};
use mealweek_web_planner::{Prompt, Widget};

/// Assembles a planner over `store` from validated configuration.
///
/// Hosts other than the browser (tests, previews) use this with an
/// in-memory store.
pub fn build_widget<S: KeyValueStore>(
    config: &Config,
    store: S,
    prompt: impl Prompt + 'static,
) -> Result<Widget<S>, AppError> {
    config.validate().map_err(AppError::InvalidConfig)?;

    let catalog = Catalog::embedded()?;
    tracing::info!(
        recipes = catalog.iter().count(),
        plan_key = %config.storage.plan_key,
        favorites_key = %config.storage.favorites_key,
        "planner assembled"
    );

    Ok(Widget::new(
        catalog,
        Persistence::new(store, config.storage_keys()),
        config.widget_settings(),
        prompt,
    ))
}
