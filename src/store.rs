//! The in-memory entry store.
//!
//! [`Cookbook`] is append-only: entries are inserted once and never updated or
//! removed. Inserts take the write lock for the duplicate check and the
//! mutation together, and summaries hold the read lock for the whole
//! resolution, so readers never observe a partially inserted entry.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard};

use serde_json::Value;

use crate::error::{CookbookError, Result};
use crate::models::*;
use crate::resolver::Resolver;

pub struct Cookbook {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

/// An insertion candidate that passed the checks not requiring the store.
enum Draft {
    Ingredient(Ingredient),
    Recipe {
        name: String,
        items: Vec<Value>,
    },
}

impl Draft {
    fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe { name, .. } => name,
        }
    }
}

impl Cookbook {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Validate `input` and add it to the cookbook.
    ///
    /// Rules are checked in a fixed order and the first violation is
    /// returned: variant tag, required fields, cook time, name uniqueness,
    /// then component quantities and uniqueness. Nothing is stored unless
    /// every rule passes.
    pub fn insert(&self, input: CreateEntryInput) -> Result<()> {
        let draft = draft_entry(input)?;

        let mut entries = self.entries.write().expect("cookbook lock poisoned");
        if entries.contains_key(draft.name()) {
            return Err(CookbookError::DuplicateName(draft.name().to_string()));
        }

        let entry = match draft {
            Draft::Ingredient(ingredient) => Entry::Ingredient(ingredient),
            Draft::Recipe { name, items } => Entry::Recipe(build_recipe(name, items)?),
        };

        tracing::info!("Added {} '{}'", entry.kind().as_str(), entry.name());
        entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<Entry> {
        self.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Summarize the recipe called `name`.
    ///
    /// The read lock is held for the entire resolution.
    pub fn summarize(&self, name: &str) -> Result<RecipeSummary> {
        let entries = self.read();
        Resolver::new(&entries).summarize(name)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().expect("cookbook lock poisoned")
    }
}

impl Default for Cookbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Cookbook {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

fn draft_entry(input: CreateEntryInput) -> Result<Draft> {
    let kind = input
        .kind
        .as_ref()
        .and_then(Value::as_str)
        .and_then(EntryKind::parse)
        .ok_or(CookbookError::InvalidType)?;

    let name = match input.name {
        Some(Value::String(name)) if !name.is_empty() => name,
        _ => return Err(CookbookError::MissingField("name")),
    };

    match kind {
        EntryKind::Recipe => match input.required_items {
            Some(Value::Array(items)) => Ok(Draft::Recipe { name, items }),
            _ => Err(CookbookError::MissingField("requiredItems")),
        },
        EntryKind::Ingredient => {
            let cook_time = input
                .cook_time
                .as_ref()
                .and_then(parse_integer)
                .filter(|t| *t >= 0)
                .ok_or(CookbookError::InvalidCookTime)?;
            Ok(Draft::Ingredient(Ingredient { name, cook_time }))
        }
    }
}

/// Parse every component, then reject repeated names.
fn build_recipe(name: String, items: Vec<Value>) -> Result<Recipe> {
    let required_items = items
        .iter()
        .map(parse_component)
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for component in &required_items {
        if !seen.insert(component.name.as_str()) {
            return Err(CookbookError::DuplicateComponent(component.name.clone()));
        }
    }

    Ok(Recipe {
        name,
        required_items,
    })
}

fn parse_component(item: &Value) -> Result<Component> {
    let name = item
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(CookbookError::MissingField("requiredItems.name"))?;

    match item.get("quantity").and_then(parse_integer) {
        Some(quantity) if quantity >= 0 => Ok(Component {
            name: name.to_string(),
            quantity,
        }),
        _ => Err(CookbookError::InvalidQuantity(name.to_string())),
    }
}
