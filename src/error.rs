//! Error types for cookbook operations.
//!
//! Every variant is a recoverable, user-facing validation outcome. The HTTP
//! layer maps all of them to `400 Bad Request`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CookbookError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookbookError {
    // Insertion
    #[error("Entry type must be either 'recipe' or 'ingredient'")]
    InvalidType,

    #[error("Missing or invalid field '{0}'")]
    MissingField(&'static str),

    #[error("cookTime must be an integer greater than or equal to 0")]
    InvalidCookTime,

    #[error("An entry named '{0}' already exists")]
    DuplicateName(String),

    #[error("requiredItems lists '{0}' more than once")]
    DuplicateComponent(String),

    #[error("Quantity for '{0}' must be an integer greater than or equal to 0")]
    InvalidQuantity(String),

    // Resolution / summary
    #[error("No entry named '{0}'")]
    NotFound(String),

    #[error("'{0}' is an ingredient, not a recipe")]
    WrongType(String),

    #[error("Recipe requires unknown entry '{0}'")]
    UnknownComponent(String),

    #[error("Recipe composition is cyclic: {}", .path.join(" -> "))]
    CyclicComposition { path: Vec<String> },

    #[error("Quantity overflow while resolving '{0}'")]
    QuantityOverflow(String),

    // Normalization
    #[error("Invalid recipe name")]
    InvalidName,
}
