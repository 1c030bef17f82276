pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod resolver;
pub mod store;

pub use error::{CookbookError, Result};
pub use store::Cookbook;
