//! Markup for the three regions of the planner and the page around them.
//!
//! Every function here is pure: it reads the snapshot it is given and returns
//! HTML. Interactive elements carry `data-action` attributes which the host
//! maps back to [`crate::Action`]s.

use askama::Template;
use mealweek_recipe::Catalog;
use mealweek_shared::{Day, FilterMode, Recipe};
use mealweek_storage::{Favorites, WeeklyPlan};
use strum::VariantArray;

use crate::ElementIds;

const PREVIEW_INGREDIENTS: usize = 3;

pub struct Card {
    pub id: String,
    pub title: String,
    pub image: String,
    pub ingredients: String,
    pub minutes: u32,
    pub vegetarian: bool,
    pub favorite: bool,
}

#[derive(Template)]
#[template(path = "recipe_list.html")]
pub struct RecipeListTemplate {
    pub cards: Vec<Card>,
    pub days: Vec<String>,
}

pub struct PlannedRecipe {
    pub title: String,
    pub preview: String,
}

pub struct PlanRow {
    pub day: String,
    pub recipe: Option<PlannedRecipe>,
}

#[derive(Template)]
#[template(path = "plan_table.html")]
pub struct PlanTableTemplate {
    pub rows: Vec<PlanRow>,
}

pub struct FavoriteRow {
    pub id: String,
    pub title: String,
    pub minutes: u32,
}

#[derive(Template)]
#[template(path = "favorites.html")]
pub struct FavoritesTemplate {
    pub has_favorites: bool,
    pub rows: Vec<FavoriteRow>,
}

pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub ids: ElementIds,
    pub filters: Vec<FilterOption>,
    pub list: String,
    pub plan: String,
    pub favorites: String,
}

pub fn recipe_list(visible: &[&Recipe], favorites: &Favorites) -> askama::Result<String> {
    let cards = visible
        .iter()
        .map(|recipe| Card {
            id: recipe.id.to_owned(),
            title: recipe.title.to_owned(),
            image: recipe.image.to_owned(),
            ingredients: recipe.ingredients.join(", "),
            minutes: recipe.minutes,
            vegetarian: recipe.vegetarian,
            favorite: favorites.contains(&recipe.id),
        })
        .collect();

    RecipeListTemplate {
        cards,
        days: Day::VARIANTS.iter().map(|d| d.to_string()).collect(),
    }
    .render()
}

/// One row per day; ids missing from the catalog render as an empty slot.
pub fn plan_table(plan: &WeeklyPlan, catalog: &Catalog) -> askama::Result<String> {
    let rows = plan
        .iter()
        .map(|(day, recipe_id)| PlanRow {
            day: day.to_string(),
            recipe: recipe_id.and_then(|id| catalog.get(id)).map(|recipe| PlannedRecipe {
                title: recipe.title.to_owned(),
                preview: recipe.ingredient_preview(PREVIEW_INGREDIENTS),
            }),
        })
        .collect();

    PlanTableTemplate { rows }.render()
}

pub fn favorites_list(favorites: &Favorites, catalog: &Catalog) -> askama::Result<String> {
    let rows = favorites
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|recipe| FavoriteRow {
            id: recipe.id.to_owned(),
            title: recipe.title.to_owned(),
            minutes: recipe.minutes,
        })
        .collect();

    FavoritesTemplate {
        has_favorites: !favorites.is_empty(),
        rows,
    }
    .render()
}

pub fn filter_options(current: FilterMode, quick_threshold: u32) -> Vec<FilterOption> {
    FilterMode::VARIANTS
        .iter()
        .map(|mode| FilterOption {
            value: mode.to_string(),
            label: match mode {
                FilterMode::Quick => format!("{} (< {quick_threshold} min)", mode.label()),
                _ => mode.label().to_owned(),
            },
            selected: *mode == current,
        })
        .collect()
}
