//! HTTP client for the recipe service.

pub mod client;

pub use client::{NewRecipe, Recipe, RecipeClient, SdkError};
