use mealweek_shared::{FilterMode, QUICK_THRESHOLD_MINUTES, Recipe};

use crate::Catalog;

/// Search and filter criteria of the recipe list. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    search_term: String,
    filter_mode: FilterMode,
    quick_threshold: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter_mode: FilterMode::All,
            quick_threshold: QUICK_THRESHOLD_MINUTES,
        }
    }
}

impl ViewState {
    pub fn new(search_term: &str, filter_mode: FilterMode) -> Self {
        let mut view = Self::default();
        view.set_search_term(search_term);
        view.set_filter_mode(filter_mode);

        view
    }

    pub fn with_quick_threshold(mut self, minutes: u32) -> Self {
        self.quick_threshold = minutes;
        self
    }

    /// Stores the term trimmed and lowercased, ready for matching.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.trim().to_lowercase();
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn quick_threshold(&self) -> u32 {
        self.quick_threshold
    }

    pub fn matches_text(&self, recipe: &Recipe) -> bool {
        let term = self.search_term.as_str();

        term.is_empty()
            || recipe.title.to_lowercase().contains(term)
            || recipe
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(term))
    }

    pub fn matches_filter(&self, recipe: &Recipe) -> bool {
        match self.filter_mode {
            FilterMode::All => true,
            FilterMode::Vegetarian => recipe.vegetarian,
            FilterMode::Quick => recipe.is_quick(self.quick_threshold),
        }
    }

    pub fn is_visible(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe) && self.matches_filter(recipe)
    }
}

/// Recipes passing both the text and the filter predicate, in catalog order.
pub fn compute_visible<'a>(catalog: &'a Catalog, view: &ViewState) -> Vec<&'a Recipe> {
    catalog.iter().filter(|r| view.is_visible(r)).collect()
}
