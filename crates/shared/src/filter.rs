use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Preparation time below which a recipe counts as quick.
pub const QUICK_THRESHOLD_MINUTES: u32 = 25;

/// Option values of the filter selector.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    #[strum(to_string = "all")]
    All,
    #[strum(to_string = "veg")]
    #[serde(rename = "veg")]
    Vegetarian,
    #[strum(to_string = "quick")]
    Quick,
}

impl FilterMode {
    /// Parses a selector value, unknown values show everything.
    pub fn from_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Vegetarian => "Vegetarian",
            FilterMode::Quick => "Quick",
        }
    }
}
