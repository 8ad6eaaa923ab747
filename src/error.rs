use mealweek_recipe::CatalogError;
use mealweek_storage::StorageError;
use mealweek_web_planner::WidgetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    #[error("Browser API unavailable: {0}")]
    Browser(&'static str),

    #[error("Element #{0} not found")]
    MissingElement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_failures_convert_into_app_error() {
        let err: AppError = StorageError::Unavailable.into();
        assert!(matches!(err, AppError::Storage(StorageError::Unavailable)));

        let err: AppError = WidgetError::from(StorageError::Unavailable).into();
        assert!(matches!(err, AppError::Widget(WidgetError::Storage(_))));

        assert_eq!(
            AppError::MissingElement("q".to_owned()).to_string(),
            "Element #q not found"
        );
    }
}
