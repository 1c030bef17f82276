//! Base ingredient resolution.
//!
//! Expands a recipe's composition graph depth-first, scaling each
//! component's quantity by the quantity of the recipe that required it, and
//! sums the quantities of every ingredient reached. Expansion is iterative
//! and each sub-recipe is expanded at most once per resolution. Component
//! names are looked up at resolution time, so a missing entry at any depth
//! fails the whole resolution.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::error::{CookbookError, Result};
use crate::models::*;

/// Ingredient name to total quantity, in the order ingredients were first
/// reached.
pub type BaseIngredients = IndexMap<String, i64>;

/// A read-only view over the cookbook's entries.
pub struct Resolver<'a> {
    entries: &'a HashMap<String, Entry>,
}

impl<'a> Resolver<'a> {
    pub fn new(entries: &'a HashMap<String, Entry>) -> Self {
        Self { entries }
    }

    /// Flatten `recipe` into the ingredients it ultimately requires, with
    /// every quantity multiplied by `multiplier`.
    ///
    /// Fails with [`CookbookError::CyclicComposition`] when a recipe
    /// reappears on its own expansion path. A sub-recipe shared by sibling
    /// branches is not a cycle; it is expanded once and its totals reused.
    pub fn resolve_base_ingredients(
        &self,
        recipe: &Recipe,
        multiplier: i64,
    ) -> Result<BaseIngredients> {
        let base = self.expand(recipe)?;
        let mut totals = BaseIngredients::with_capacity(base.len());
        merge_scaled(&mut totals, &base, multiplier)?;
        Ok(totals)
    }

    /// Base ingredients of `root` for a single batch.
    ///
    /// Walks the graph with an explicit stack so chain length is bounded by
    /// memory rather than thread stack size. Each recipe's per-batch totals
    /// are memoized for the duration of the call.
    fn expand<'r>(&'r self, root: &'r Recipe) -> Result<BaseIngredients> {
        let mut memo: HashMap<&'r str, BaseIngredients> = HashMap::new();
        let mut on_path: HashSet<&'r str> = HashSet::from([root.name.as_str()]);
        let mut stack = vec![Frame::new(root)];

        while let Some(frame) = stack.last_mut() {
            let recipe = frame.recipe;
            let Some(component) = recipe.required_items.get(frame.next) else {
                let totals = std::mem::take(&mut frame.totals);
                stack.pop();
                on_path.remove(recipe.name.as_str());
                memo.insert(recipe.name.as_str(), totals);
                continue;
            };

            let entry = self
                .entries
                .get(&component.name)
                .ok_or_else(|| CookbookError::UnknownComponent(component.name.clone()))?;

            match entry {
                Entry::Ingredient(_) => {
                    accumulate(&mut frame.totals, &component.name, component.quantity)?
                }
                Entry::Recipe(sub_recipe) => {
                    if let Some(base) = memo.get(sub_recipe.name.as_str()) {
                        merge_scaled(&mut frame.totals, base, component.quantity)?;
                    } else if on_path.contains(sub_recipe.name.as_str()) {
                        return Err(cycle_error(&stack, &sub_recipe.name));
                    } else {
                        // Revisit this component once the sub-recipe is memoized
                        on_path.insert(sub_recipe.name.as_str());
                        stack.push(Frame::new(sub_recipe));
                        continue;
                    }
                }
            }

            frame.next += 1;
        }

        Ok(memo.remove(root.name.as_str()).unwrap_or_default())
    }

    /// Sum `cook_time * quantity` over resolved base ingredients.
    pub fn total_cook_time(&self, base: &BaseIngredients) -> Result<i64> {
        base.iter().try_fold(0i64, |total, (name, quantity)| {
            let Some(Entry::Ingredient(ingredient)) = self.entries.get(name) else {
                return Err(CookbookError::UnknownComponent(name.clone()));
            };
            ingredient
                .cook_time
                .checked_mul(*quantity)
                .and_then(|time| total.checked_add(time))
                .ok_or_else(|| CookbookError::QuantityOverflow(name.clone()))
        })
    }

    /// Resolve the recipe called `name` into a [`RecipeSummary`].
    pub fn summarize(&self, name: &str) -> Result<RecipeSummary> {
        let recipe = match self.entries.get(name) {
            Some(Entry::Recipe(recipe)) => recipe,
            Some(Entry::Ingredient(_)) => return Err(CookbookError::WrongType(name.to_string())),
            None => return Err(CookbookError::NotFound(name.to_string())),
        };

        let base = self.resolve_base_ingredients(recipe, 1)?;
        let cook_time = self.total_cook_time(&base)?;
        tracing::debug!(
            "Resolved '{}' into {} base ingredients ({} cook time)",
            name,
            base.len(),
            cook_time
        );

        Ok(RecipeSummary {
            name: name.to_string(),
            cook_time,
            ingredients: base
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity { name, quantity })
                .collect(),
        })
    }
}

/// A recipe being expanded: the next component to visit and the totals so far.
struct Frame<'r> {
    recipe: &'r Recipe,
    next: usize,
    totals: BaseIngredients,
}

impl<'r> Frame<'r> {
    fn new(recipe: &'r Recipe) -> Self {
        Self {
            recipe,
            next: 0,
            totals: BaseIngredients::new(),
        }
    }
}

/// The cycle closed by reaching `name` again, starting at its first visit.
fn cycle_error(stack: &[Frame<'_>], name: &str) -> CookbookError {
    let start = stack
        .iter()
        .position(|frame| frame.recipe.name == name)
        .unwrap_or(0);
    let mut path: Vec<String> = stack[start..]
        .iter()
        .map(|frame| frame.recipe.name.clone())
        .collect();
    path.push(name.to_string());
    CookbookError::CyclicComposition { path }
}

fn merge_scaled(totals: &mut BaseIngredients, base: &BaseIngredients, factor: i64) -> Result<()> {
    for (name, quantity) in base {
        let scaled = quantity
            .checked_mul(factor)
            .ok_or_else(|| CookbookError::QuantityOverflow(name.clone()))?;
        accumulate(totals, name, scaled)?;
    }
    Ok(())
}

fn accumulate(totals: &mut BaseIngredients, name: &str, quantity: i64) -> Result<()> {
    let total = totals.entry(name.to_string()).or_insert(0);
    *total = total
        .checked_add(quantity)
        .ok_or_else(|| CookbookError::QuantityOverflow(name.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, cook_time: i64) -> Entry {
        Entry::Ingredient(Ingredient {
            name: name.to_string(),
            cook_time,
        })
    }

    fn recipe(name: &str, items: &[(&str, i64)]) -> Entry {
        Entry::Recipe(Recipe {
            name: name.to_string(),
            required_items: items
                .iter()
                .map(|(name, quantity)| Component {
                    name: name.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        })
    }

    fn entries(list: Vec<Entry>) -> HashMap<String, Entry> {
        list.into_iter()
            .map(|entry| (entry.name().to_string(), entry))
            .collect()
    }

    #[test]
    fn ingredients_are_ordered_by_first_visit() {
        let entries = entries(vec![
            ingredient("Bun", 1),
            ingredient("Patty", 4),
            ingredient("Cheese", 0),
            recipe("Cheeseburger", &[("Bun", 2), ("Stack", 1)]),
            recipe("Stack", &[("Patty", 1), ("Cheese", 1), ("Bun", 1)]),
        ]);

        let summary = Resolver::new(&entries).summarize("Cheeseburger").unwrap();
        let names: Vec<_> = summary.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bun", "Patty", "Cheese"]);
        assert_eq!(summary.ingredients[0].quantity, 3);
        assert_eq!(summary.cook_time, 3 + 4);
    }

    #[test]
    fn cycle_error_reports_only_the_cycle() {
        let entries = entries(vec![
            recipe("Outer", &[("Loop A", 1)]),
            recipe("Loop A", &[("Loop B", 1)]),
            recipe("Loop B", &[("Loop A", 1)]),
        ]);

        let err = Resolver::new(&entries).summarize("Outer").unwrap_err();
        assert_eq!(
            err,
            CookbookError::CyclicComposition {
                path: vec![
                    "Loop A".to_string(),
                    "Loop B".to_string(),
                    "Loop A".to_string()
                ]
            }
        );
        assert_eq!(
            err.to_string(),
            "Recipe composition is cyclic: Loop A -> Loop B -> Loop A"
        );
    }

    #[test]
    fn scaling_overflow_is_reported() {
        let entries = entries(vec![
            ingredient("Grain", 1),
            recipe("Sack", &[("Grain", i64::MAX)]),
            recipe("Silo", &[("Sack", 2)]),
        ]);

        let err = Resolver::new(&entries).summarize("Silo").unwrap_err();
        assert_eq!(err, CookbookError::QuantityOverflow("Grain".to_string()));
    }

    #[test]
    fn empty_recipe_has_no_ingredients_and_no_cook_time() {
        let entries = entries(vec![recipe("Water", &[])]);

        let summary = Resolver::new(&entries).summarize("Water").unwrap();
        assert!(summary.ingredients.is_empty());
        assert_eq!(summary.cook_time, 0);
    }

    #[test]
    fn reused_sub_recipe_keeps_first_visit_order() {
        let entries = entries(vec![
            ingredient("Flour", 1),
            ingredient("Sugar", 1),
            ingredient("Icing", 1),
            recipe("Sponge", &[("Flour", 2), ("Sugar", 1)]),
            recipe("Layer", &[("Sponge", 1), ("Icing", 1)]),
            recipe("Cake", &[("Layer", 2), ("Sponge", 3)]),
        ]);

        let summary = Resolver::new(&entries).summarize("Cake").unwrap();
        let quantities: Vec<_> = summary
            .ingredients
            .iter()
            .map(|i| (i.name.as_str(), i.quantity))
            .collect();
        assert_eq!(quantities, vec![("Flour", 10), ("Sugar", 5), ("Icing", 2)]);
    }

    #[test]
    fn long_chains_do_not_exhaust_the_stack() {
        let depth = 100_000;
        let mut list = vec![ingredient("Seed", 2)];
        for i in 0..depth {
            let next = if i + 1 == depth {
                "Seed".to_string()
            } else {
                format!("Step {}", i + 1)
            };
            list.push(recipe(&format!("Step {}", i), &[(next.as_str(), 1)]));
        }
        let entries = entries(list);

        let summary = Resolver::new(&entries).summarize("Step 0").unwrap();
        assert_eq!(
            summary.ingredients,
            vec![IngredientQuantity {
                name: "Seed".to_string(),
                quantity: 1
            }]
        );
        assert_eq!(summary.cook_time, 2);
    }
}
