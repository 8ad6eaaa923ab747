use mealweek_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
