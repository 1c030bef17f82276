use serde::{Deserialize, Serialize};

/// A stored cookbook entry.
///
/// Names are unique across both variants, so an ingredient and a recipe can
/// never share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Ingredient(_) => EntryKind::Ingredient,
            Self::Recipe(_) => EntryKind::Recipe,
        }
    }
}

/// An atomic ingredient with a fixed preparation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Always `>= 0`; enforced on insertion.
    pub cook_time: i64,
}

/// A recipe composed of other entries.
///
/// `required_items` may be empty, which describes a recipe with no
/// requirements. Component names are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<Component>,
}

/// A by-name reference to another entry, with the quantity required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub quantity: i64,
}

/// The entry variant discriminant as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Recipe => "recipe",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ingredient" => Some(Self::Ingredient),
            "recipe" => Some(Self::Recipe),
            _ => None,
        }
    }
}

/// Input for adding an entry to the cookbook.
///
/// Every field is kept as raw JSON so that each validation rule can report
/// its own error instead of a generic deserialization failure.
/// `cookTime` and `quantity` accept either JSON integers or integer strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEntryInput {
    #[serde(rename = "type")]
    pub kind: Option<serde_json::Value>,
    pub name: Option<serde_json::Value>,
    pub cook_time: Option<serde_json::Value>,
    /// Expected to be an array of `{ name, quantity }` objects.
    pub required_items: Option<serde_json::Value>,
}

impl CreateEntryInput {
    /// Input describing an ingredient.
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            kind: Some(EntryKind::Ingredient.as_str().into()),
            name: Some(serde_json::Value::String(name.into())),
            cook_time: Some(cook_time.into()),
            required_items: None,
        }
    }

    /// Input describing a recipe from `(name, quantity)` pairs.
    pub fn recipe<'a>(
        name: impl Into<String>,
        items: impl IntoIterator<Item = (&'a str, i64)>,
    ) -> Self {
        let items = items
            .into_iter()
            .map(|(name, quantity)| serde_json::json!({ "name": name, "quantity": quantity }))
            .collect();

        Self {
            kind: Some(EntryKind::Recipe.as_str().into()),
            name: Some(serde_json::Value::String(name.into())),
            cook_time: None,
            required_items: Some(serde_json::Value::Array(items)),
        }
    }
}

/// Interpret a JSON value as an integer.
///
/// Accepts integral numbers and strings that parse as `i64` (surrounding
/// whitespace ignored). Floats, booleans and other shapes are rejected.
pub fn parse_integer(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_serializes_with_type_tag_and_camel_case_fields() {
        let entry = Entry::Ingredient(Ingredient {
            name: "Egg".to_string(),
            cook_time: 5,
        });

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({ "type": "ingredient", "name": "Egg", "cookTime": 5 })
        );
    }

    #[test]
    fn recipe_deserializes_from_wire_format() {
        let entry: Entry = serde_json::from_value(json!({
            "type": "recipe",
            "name": "Omelette",
            "requiredItems": [{ "name": "Egg", "quantity": 3 }]
        }))
        .unwrap();

        assert_eq!(entry.kind(), EntryKind::Recipe);
        assert_eq!(entry.name(), "Omelette");
    }

    #[test]
    fn parse_integer_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_integer(&json!(7)), Some(7));
        assert_eq!(parse_integer(&json!(-1)), Some(-1));
        assert_eq!(parse_integer(&json!(" 12 ")), Some(12));
    }

    #[test]
    fn parse_integer_rejects_other_shapes() {
        assert_eq!(parse_integer(&json!(1.5)), None);
        assert_eq!(parse_integer(&json!("ten")), None);
        assert_eq!(parse_integer(&json!(true)), None);
        assert_eq!(parse_integer(&json!(null)), None);
    }
}
