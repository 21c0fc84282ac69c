//! Recipe service: validation, id assignment and persistence.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::observability::metrics;
use crate::recipes::id::next_id;
use crate::recipes::validation::{validate_new_recipe, MissingField, RecipeDraft};
use crate::recipes::{NewRecipe, Recipe};
use crate::storage::{RecipeStore, StoreError};

/// Errors returned by [`RecipeService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required input was absent or empty. Nothing was written.
    #[error("missing required fields: {}", join_fields(.0))]
    Validation(Vec<MissingField>),

    /// The store could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lists and appends recipes over an injected [`RecipeStore`].
///
/// Cloning is cheap and clones share the same writer lock, so every handle
/// over one store serializes its creations.
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
    writer: Arc<Mutex<()>>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self {
            store,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// All recipes in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Recipe>, ServiceError> {
        let recipes = self.store.load_all().await.inspect_err(|err| {
            metrics::record_store_error("load");
            tracing::error!(error = %err, "Failed to load recipes");
        })?;

        tracing::debug!(count = recipes.len(), "Loaded recipes");
        Ok(recipes)
    }

    /// Validate `input`, assign an id and append it to the collection.
    ///
    /// The load-append-save sequence runs in its own task that owns the
    /// writer lock, so a dropped caller cannot release the lock while a save
    /// is still in flight.
    pub async fn create(&self, input: NewRecipe) -> Result<Recipe, ServiceError> {
        let draft = validate_new_recipe(input).map_err(|missing| {
            tracing::debug!(missing = %join_fields(&missing), "Rejected recipe");
            ServiceError::Validation(missing)
        })?;

        let store = Arc::clone(&self.store);
        let writer = Arc::clone(&self.writer);
        let append = tokio::spawn(async move {
            let _guard = writer.lock_owned().await;
            append_recipe(store.as_ref(), draft).await
        });

        match append.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = %err, "Recipe writer task failed");
                Err(StoreError::Unavailable(format!("writer task failed: {err}")).into())
            }
        }
    }
}

async fn append_recipe(store: &dyn RecipeStore, draft: RecipeDraft) -> Result<Recipe, ServiceError> {
    let mut recipes = store.load_all().await.inspect_err(|err| {
        metrics::record_store_error("load");
        tracing::error!(error = %err, "Failed to load recipes before append");
    })?;

    let recipe = draft.into_recipe(next_id(&recipes));
    recipes.push(recipe.clone());

    store.save_all(&recipes).await.inspect_err(|err| {
        metrics::record_store_error("save");
        tracing::error!(recipe_id = recipe.id, error = %err, "Failed to save recipes");
    })?;

    metrics::record_recipe_created();
    tracing::info!(
        recipe_id = recipe.id,
        title = %recipe.title,
        total = recipes.len(),
        "Recipe created"
    );
    Ok(recipe)
}
