use mealweek_shared::QUICK_THRESHOLD_MINUTES;

/// Element ids the widget renders into and listens on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub list: String,
    pub plan: String,
    pub favorites: String,
    pub search: String,
    pub filter: String,
    pub reset: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            list: "list".to_owned(),
            plan: "planTable".to_owned(),
            favorites: "favs".to_owned(),
            search: "q".to_owned(),
            filter: "filter".to_owned(),
            reset: "clearData".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetSettings {
    pub quick_threshold: u32,
    pub confirm_reset_message: String,
    pub ids: ElementIds,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            quick_threshold: QUICK_THRESHOLD_MINUTES,
            confirm_reset_message: "Clear your saved Weekly Plan and Favorites?".to_owned(),
            ids: ElementIds::default(),
        }
    }
}
