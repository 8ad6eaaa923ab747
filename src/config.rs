use config::{Config as ConfigBuilder, ConfigError, Environment, File, FileFormat};
use mealweek_storage::{DEFAULT_FAVORITES_KEY, DEFAULT_PLAN_KEY, StorageKeys};
use mealweek_web_planner::{ElementIds, WidgetSettings};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub plan_key: String,
    pub favorites_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub quick_threshold_minutes: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_list_id")]
    pub list_id: String,
    #[serde(default = "default_plan_id")]
    pub plan_id: String,
    #[serde(default = "default_favorites_id")]
    pub favorites_id: String,
    #[serde(default = "default_search_id")]
    pub search_id: String,
    #[serde(default = "default_filter_id")]
    pub filter_id: String,
    #[serde(default = "default_reset_id")]
    pub reset_id: String,
    #[serde(default = "default_confirm_reset_message")]
    pub confirm_reset_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            list_id: default_list_id(),
            plan_id: default_plan_id(),
            favorites_id: default_favorites_id(),
            search_id: default_search_id(),
            filter_id: default_filter_id(),
            reset_id: default_reset_id(),
            confirm_reset_message: default_confirm_reset_message(),
        }
    }
}

fn default_list_id() -> String {
    "list".to_string()
}

fn default_plan_id() -> String {
    "planTable".to_string()
}

fn default_favorites_id() -> String {
    "favs".to_string()
}

fn default_search_id() -> String {
    "q".to_string()
}

fn default_filter_id() -> String {
    "filter".to_string()
}

fn default_reset_id() -> String {
    "clearData".to_string()
}

fn default_confirm_reset_message() -> String {
    "Clear your saved Weekly Plan and Favorites?".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from an optional TOML document and the environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWEEK__STORAGE__PLAN_KEY, etc.)
    /// 2. The TOML document, usually embedded in the host page
    /// 3. Hardcoded defaults
    pub fn load(toml: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with_env(toml, None)
    }

    /// Same as [`Config::load`], reading variables from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        toml: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("storage.plan_key", DEFAULT_PLAN_KEY)?
            .set_default("storage.favorites_key", DEFAULT_FAVORITES_KEY)?
            .set_default("catalog.quick_threshold_minutes", 25)?;

        if let Some(toml) = toml {
            builder = builder.add_source(File::from_str(toml, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWEEK")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.plan_key.is_empty() || self.storage.favorites_key.is_empty() {
            return Err("Storage keys must not be empty".to_string());
        }
        if self.storage.plan_key == self.storage.favorites_key {
            return Err("Plan and favorites must use different storage keys".to_string());
        }
        if self.catalog.quick_threshold_minutes == 0 {
            return Err("Quick threshold must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            plan: self.storage.plan_key.to_owned(),
            favorites: self.storage.favorites_key.to_owned(),
        }
    }

    pub fn widget_settings(&self) -> WidgetSettings {
        WidgetSettings {
            quick_threshold: self.catalog.quick_threshold_minutes,
            confirm_reset_message: self.ui.confirm_reset_message.to_owned(),
            ids: ElementIds {
                list: self.ui.list_id.to_owned(),
                plan: self.ui.plan_id.to_owned(),
                favorites: self.ui.favorites_id.to_owned(),
                search: self.ui.search_id.to_owned(),
                filter: self.ui.filter_id.to_owned(),
                reset: self.ui.reset_id.to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(plan_key: &str, favorites_key: &str, quick_threshold_minutes: u32) -> Config {
        Config {
            storage: StorageConfig {
                plan_key: plan_key.to_string(),
                favorites_key: favorites_key.to_string(),
            },
            catalog: CatalogConfig {
                quick_threshold_minutes,
            },
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_empty_key() {
        assert!(config("", "rfmp.favs.v1", 25).validate().is_err());
    }

    #[test]
    fn test_validation_shared_key() {
        assert!(config("same", "same", 25).validate().is_err());
    }

    #[test]
    fn test_validation_zero_threshold() {
        assert!(config("rfmp.plan.v1", "rfmp.favs.v1", 0).validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config("rfmp.plan.v1", "rfmp.favs.v1", 25).validate().is_ok());
    }

    #[test]
    fn test_widget_settings_follow_ui_section() {
        let mut config = config("p", "f", 30);
        config.ui.plan_id = "plan-body".to_string();

        let settings = config.widget_settings();

        assert_eq!(settings.quick_threshold, 30);
        assert_eq!(settings.ids.plan, "plan-body");
        assert_eq!(settings.ids.list, "list");
        assert_eq!(config.storage_keys().favorites, "f");
    }
}
