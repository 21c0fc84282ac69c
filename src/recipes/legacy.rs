//! Lenient decoding for stored records.
//!
//! Older data files accepted any JSON for the free-form fields. Stored
//! values are coerced to the current shapes on load; strings pass through,
//! `null` becomes empty, and any other value keeps its JSON text. Requests
//! are still decoded strictly through [`crate::recipes::NewRecipe`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::recipes::{Instructions, DEFAULT_DIFFICULTY};

fn text_of(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

/// A list keeps its items; a lone value becomes a one-item list.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(text_of).collect(),
        Value::Null => Vec::new(),
        other => vec![text_of(other)],
    })
}

pub fn instructions<'de, D>(deserializer: D) -> Result<Instructions, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Instructions::Steps(items.into_iter().map(text_of).collect()),
        other => Instructions::Text(text_of(other)),
    })
}

pub fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

#[cfg(test)]
mod tests {
    use crate::recipes::{Instructions, Recipe};

    #[test]
    fn test_loose_stored_record_is_coerced() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "id": 1700000000000,
                "title": "Stew",
                "ingredients": "water, salt",
                "instructions": {"step": 1},
                "cookTime": 45
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.ingredients, vec!["water, salt"]);
        assert_eq!(recipe.instructions, Instructions::Text(r#"{"step":1}"#.into()));
        assert_eq!(recipe.cook_time, "45");
        assert_eq!(recipe.difficulty, "medium");
    }

    #[test]
    fn test_mixed_lists_keep_their_order() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 2, "title": "Bread", "ingredients": ["flour", 2, null],
                "instructions": ["Knead", 10], "cookTime": null, "difficulty": "hard"}"#,
        )
        .unwrap();

        assert_eq!(recipe.ingredients, vec!["flour", "2", ""]);
        assert_eq!(
            recipe.instructions,
            Instructions::Steps(vec!["Knead".into(), "10".into()])
        );
        assert_eq!(recipe.cook_time, "");
        assert_eq!(recipe.difficulty, "hard");
    }

    #[test]
    fn test_id_stays_strict() {
        let result = serde_json::from_str::<Recipe>(
            r#"{"id": "abc", "title": "T", "ingredients": [], "instructions": ""}"#,
        );
        assert!(result.is_err());
    }
}
