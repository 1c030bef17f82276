use serde::{Deserialize, Serialize};

/// A recipe flattened into its base ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    /// Sum of `cook_time * quantity` over every base ingredient.
    pub cook_time: i64,
    /// Base ingredients in the order they were first reached.
    pub ingredients: Vec<IngredientQuantity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: i64,
}

/// Query string for the summary endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Input for the name normalization endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseInput {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOutput {
    pub msg: String,
}
