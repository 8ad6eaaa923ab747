use std::collections::HashSet;

use mealweek_shared::Recipe;

use crate::CatalogError;

const EMBEDDED_CATALOG: &str = include_str!("../catalog.json");

/// Fixed, ordered list of every recipe the planner knows about.
#[derive(Clone, Debug)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Loads the catalog shipped with the widget.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;

        Self::new(recipes)
    }

    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(recipes.len());

        for recipe in recipes.iter() {
            if recipe.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }

            if !ids.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.to_owned()));
            }

            if recipe.ingredients.is_empty() {
                return Err(CatalogError::NoIngredients(recipe.id.to_owned()));
            }

            if recipe.minutes == 0 {
                return Err(CatalogError::NoMinutes(recipe.id.to_owned()));
            }
        }

        tracing::debug!(recipes = recipes.len(), "catalog loaded");

        Ok(Self { recipes })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, ingredients: &[&str], minutes: u32) -> Recipe {
        Recipe {
            id: id.to_owned(),
            title: format!("recipe {id}"),
            minutes,
            vegetarian: false,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            image: String::new(),
        }
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let ids = catalog.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();

        assert_eq!(ids, ["r1", "r2", "r3", "r4", "r5"]);
        assert_eq!(catalog.get("r4").map(|r| r.minutes), Some(25));
        assert!(catalog.get("r9").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![recipe("a", &["x"], 5), recipe("a", &["y"], 5)]).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn rejects_recipe_without_ingredients() {
        let err = Catalog::new(vec![recipe("a", &[], 5)]).unwrap_err();

        assert!(matches!(err, CatalogError::NoIngredients(_)));
    }

    #[test]
    fn rejects_zero_minutes() {
        let err = Catalog::new(vec![recipe("a", &["x"], 0)]).unwrap_err();

        assert!(matches!(err, CatalogError::NoMinutes(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{\"id\": 1}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
