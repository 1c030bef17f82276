//! Domain models for the cookbook.
//!
//! # Core Concepts
//!
//! - [`Entry`]: A uniquely named item in the cookbook, either an
//!   [`Ingredient`] (atomic, with a fixed cook time) or a [`Recipe`].
//! - [`Component`]: A `(name, quantity)` reference from a recipe to another
//!   entry. References are resolved by name at summary time, so a recipe may
//!   list entries that have not been added yet.
//! - [`RecipeSummary`]: A recipe flattened into the base ingredients it
//!   ultimately requires, plus the total time to cook them.

mod entry;
mod summary;

pub use entry::*;
pub use summary::*;
