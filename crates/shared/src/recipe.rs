use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub minutes: u32,
    pub vegetarian: bool,
    pub ingredients: Vec<String>,
    pub image: String,
}

impl Recipe {
    pub fn is_quick(&self, threshold: u32) -> bool {
        self.minutes < threshold
    }

    /// First `count` ingredients joined for compact display.
    pub fn ingredient_preview(&self, count: usize) -> String {
        self.ingredients
            .iter()
            .take(count)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
