//! Recipe records and the creation payload.

use serde::{Deserialize, Serialize};

use crate::recipes::legacy;

/// Difficulty assigned when a recipe is created without one.
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// A persisted recipe.
///
/// Decoding is lenient about the free-form fields, see [`legacy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique within a store. Milliseconds since the epoch at creation,
    /// bumped when that would collide with an existing id.
    pub id: u64,

    #[serde(deserialize_with = "legacy::text")]
    pub title: String,

    #[serde(deserialize_with = "legacy::text_list")]
    pub ingredients: Vec<String>,

    #[serde(deserialize_with = "legacy::instructions")]
    pub instructions: Instructions,

    /// Free-form duration text, empty when not given.
    #[serde(default, deserialize_with = "legacy::text")]
    pub cook_time: String,

    #[serde(
        default = "legacy::default_difficulty",
        deserialize_with = "legacy::text"
    )]
    pub difficulty: String,
}

/// Preparation instructions, kept in the shape the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instructions {
    /// One block of text.
    Text(String),
    /// Ordered steps.
    Steps(Vec<String>),
}

impl Instructions {
    /// True when there is no non-empty text anywhere.
    pub fn is_blank(&self) -> bool {
        match self {
            Instructions::Text(text) => text.is_empty(),
            Instructions::Steps(steps) => steps.iter().all(|s| s.is_empty()),
        }
    }
}

/// Body of a creation request. Every field is optional at the wire level;
/// presence is checked by [`crate::recipes::validation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Instructions>,
    pub cook_time: Option<String>,
    pub difficulty: Option<String>,
}
