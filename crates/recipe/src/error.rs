use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Recipe with an empty id")]
    EmptyId,

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    #[error("Recipe {0} has no ingredients")]
    NoIngredients(String),

    #[error("Recipe {0} has no preparation time")]
    NoMinutes(String),
}
