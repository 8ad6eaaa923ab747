use askama::Template;
use mealweek_recipe::{Catalog, ViewState, compute_visible};
use mealweek_shared::{Day, FilterMode, Recipe};
use mealweek_storage::{Document, KeyValueStore, Persistence, StorageChange};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::{Result, WidgetSettings, render};

/// Yes/no gate in front of destructive actions.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Prompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Answers every prompt the same way.
#[derive(Clone, Copy, Debug)]
pub struct FixedAnswer(pub bool);

impl Prompt for FixedAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    RecipeList,
    PlanTable,
    Favorites,
}

impl Region {
    pub fn element_id<'a>(&self, settings: &'a WidgetSettings) -> &'a str {
        match self {
            Region::RecipeList => &settings.ids.list,
            Region::PlanTable => &settings.ids.plan,
            Region::Favorites => &settings.ids.favorites,
        }
    }
}

/// User input the widget reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Search(String),
    Filter(FilterMode),
    Assign { recipe_id: String, day: Option<Day> },
    ToggleFavorite(String),
    ClearDay(Day),
    RemoveFavorite(String),
    Reset,
}

/// What the host has to do to the page after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Replace { region: Region, html: String },
    FocusDaySelector { recipe_id: String },
    ResetDaySelector { recipe_id: String },
}

impl Effect {
    pub fn region(&self) -> Option<Region> {
        match self {
            Effect::Replace { region, .. } => Some(*region),
            _ => None,
        }
    }
}

pub struct Widget<S> {
    catalog: Catalog,
    persistence: Persistence<S>,
    view: ViewState,
    settings: WidgetSettings,
    prompt: Box<dyn Prompt>,
}

impl<S: KeyValueStore> Widget<S> {
    pub fn new(
        catalog: Catalog,
        persistence: Persistence<S>,
        settings: WidgetSettings,
        prompt: impl Prompt + 'static,
    ) -> Self {
        Self {
            catalog,
            persistence,
            view: ViewState::default().with_quick_threshold(settings.quick_threshold),
            settings,
            prompt: Box::new(prompt),
        }
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    /// Adopts search and filter values already present in the page, such as
    /// those restored by the browser on reload. Nothing is rendered.
    pub fn restore_controls(&mut self, search_term: &str, filter_mode: FilterMode) {
        self.view = ViewState::new(search_term, filter_mode)
            .with_quick_threshold(self.settings.quick_threshold);
        tracing::debug!(view = ?self.view, "controls restored");
    }

    pub fn visible(&self) -> Vec<&Recipe> {
        compute_visible(&self.catalog, &self.view)
    }

    /// Runs one action to completion: read, mutate, persist, render.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Effect>> {
        tracing::debug!(?action, "dispatch");

        match action {
            Action::Search(term) => {
                self.view.set_search_term(&term);
                self.render(&[Region::RecipeList])
            }
            Action::Filter(mode) => {
                self.view.set_filter_mode(mode);
                self.render(&[Region::RecipeList])
            }
            Action::Assign { recipe_id, day: None } => {
                Ok(vec![Effect::FocusDaySelector { recipe_id }])
            }
            Action::Assign {
                recipe_id,
                day: Some(day),
            } => {
                let mut plan = self.persistence.load_plan();
                plan.assign(day, recipe_id.to_owned());
                self.persistence.save_plan(&plan)?;
                tracing::info!(%day, %recipe_id, "recipe assigned");

                let mut effects = vec![Effect::ResetDaySelector { recipe_id }];
                effects.extend(self.render(&[Region::PlanTable])?);

                Ok(effects)
            }
            Action::ToggleFavorite(recipe_id) => {
                let mut favorites = self.persistence.load_favorites();
                let favorite = favorites.toggle(&recipe_id);
                self.persistence.save_favorites(&favorites)?;
                tracing::info!(%recipe_id, favorite, "favorite toggled");

                self.render(&[Region::RecipeList, Region::Favorites])
            }
            Action::ClearDay(day) => {
                let mut plan = self.persistence.load_plan();
                plan.clear(day);
                self.persistence.save_plan(&plan)?;
                tracing::info!(%day, "day cleared");

                self.render(&[Region::PlanTable])
            }
            Action::RemoveFavorite(recipe_id) => {
                let mut favorites = self.persistence.load_favorites();
                favorites.remove(&recipe_id);
                self.persistence.save_favorites(&favorites)?;
                tracing::info!(%recipe_id, "favorite removed");

                self.render(&[Region::RecipeList, Region::Favorites])
            }
            Action::Reset => {
                if !self.prompt.confirm(&self.settings.confirm_reset_message) {
                    tracing::debug!("reset declined");

                    return Ok(vec![]);
                }

                self.persistence.reset_all()?;

                self.render(&[Region::PlanTable, Region::Favorites, Region::RecipeList])
            }
        }
    }

    pub fn render_all(&self) -> Result<Vec<Effect>> {
        self.render(&[Region::RecipeList, Region::PlanTable, Region::Favorites])
    }

    /// Full planner markup with every region already filled in.
    pub fn render_shell(&self) -> Result<String> {
        let favorites = self.persistence.load_favorites();
        let plan = self.persistence.load_plan();

        let html = render::ShellTemplate {
            ids: self.settings.ids.clone(),
            filters: render::filter_options(self.view.filter_mode(), self.view.quick_threshold()),
            list: render::recipe_list(&self.visible(), &favorites)?,
            plan: render::plan_table(&plan, &self.catalog)?,
            favorites: render::favorites_list(&favorites, &self.catalog)?,
        }
        .render()?;

        Ok(html)
    }

    /// Re-renders whatever depends on a key changed by another context.
    /// `None` means the other context cleared the whole store.
    pub fn on_storage_change(&self, key: Option<&str>) -> Result<Vec<Effect>> {
        let regions = self.regions_for(key);
        tracing::debug!(?key, ?regions, "storage changed elsewhere");

        self.render(&regions)
    }

    /// Handles every pending change without waiting, rendering each region once.
    pub fn drain_changes(
        &self,
        changes: &mut broadcast::Receiver<StorageChange>,
    ) -> Result<Vec<Effect>> {
        let mut regions: Vec<Region> = vec![];

        loop {
            let pending = match changes.try_recv() {
                Ok(change) => self.regions_for(change.key.as_deref()),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "missed storage changes, rendering everything");

                    vec![Region::PlanTable, Region::Favorites, Region::RecipeList]
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            };

            for region in pending {
                if !regions.contains(&region) {
                    regions.push(region);
                }
            }
        }

        self.render(&regions)
    }

    fn regions_for(&self, key: Option<&str>) -> Vec<Region> {
        match key.map(|key| self.persistence.document(key)) {
            None => vec![Region::PlanTable, Region::Favorites, Region::RecipeList],
            Some(Some(Document::Plan)) => vec![Region::PlanTable],
            Some(Some(Document::Favorites)) => vec![Region::Favorites, Region::RecipeList],
            Some(None) => vec![],
        }
    }

    fn render(&self, regions: &[Region]) -> Result<Vec<Effect>> {
        let mut effects = Vec::with_capacity(regions.len());

        for region in regions {
            let html = match region {
                Region::RecipeList => {
                    render::recipe_list(&self.visible(), &self.persistence.load_favorites())?
                }
                Region::PlanTable => {
                    render::plan_table(&self.persistence.load_plan(), &self.catalog)?
                }
                Region::Favorites => {
                    render::favorites_list(&self.persistence.load_favorites(), &self.catalog)?
                }
            };

            tracing::debug!(?region, bytes = html.len(), "region rendered");

            effects.push(Effect::Replace {
                region: *region,
                html,
            });
        }

        Ok(effects)
    }
}
