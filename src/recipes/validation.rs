//! Presence checks for creation requests.
//!
//! Returns every missing field at once rather than stopping at the first.

use std::fmt;

use crate::recipes::{Instructions, NewRecipe, Recipe, DEFAULT_DIFFICULTY};

/// A required field that was absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Title,
    Ingredients,
    Instructions,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingField::Title => "title",
            MissingField::Ingredients => "ingredients",
            MissingField::Instructions => "instructions",
        };
        f.write_str(name)
    }
}

/// A creation request that passed validation, with defaults resolved.
/// Becomes a [`Recipe`] once an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Instructions,
    pub cook_time: String,
    pub difficulty: String,
}

impl RecipeDraft {
    pub fn into_recipe(self, id: u64) -> Recipe {
        Recipe {
            id,
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            cook_time: self.cook_time,
            difficulty: self.difficulty,
        }
    }
}

/// Check the required fields and fill in optional defaults.
///
/// An empty string counts as absent, for optional fields too: an empty
/// `difficulty` resolves to [`DEFAULT_DIFFICULTY`].
pub fn validate_new_recipe(input: NewRecipe) -> Result<RecipeDraft, Vec<MissingField>> {
    let mut missing = Vec::new();

    let title = input.title.filter(|t| !t.is_empty());
    if title.is_none() {
        missing.push(MissingField::Title);
    }

    let ingredients = input
        .ingredients
        .filter(|items| items.iter().any(|i| !i.is_empty()));
    if ingredients.is_none() {
        missing.push(MissingField::Ingredients);
    }

    let instructions = input.instructions.filter(|i| !i.is_blank());
    if instructions.is_none() {
        missing.push(MissingField::Instructions);
    }

    match (title, ingredients, instructions) {
        (Some(title), Some(ingredients), Some(instructions)) => Ok(RecipeDraft {
            title,
            ingredients,
            instructions,
            cook_time: input.cook_time.unwrap_or_default(),
            difficulty: input
                .difficulty
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        }),
        _ => Err(missing),
    }
}
