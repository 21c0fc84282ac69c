//! Recipe handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::http::error::HttpError;
use crate::http::server::AppState;
use crate::recipes::{NewRecipe, Recipe};

/// `GET /api/recipes`
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, HttpError> {
    let recipes = state.recipes.list_all().await.map_err(HttpError::from_list)?;
    Ok(Json(recipes))
}

/// `POST /api/recipes`
///
/// A body that is not a JSON object of the expected shape is treated the
/// same as one missing its required fields. A body that cannot be read
/// keeps the extractor's status (413 when over the size limit).
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<NewRecipe>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), HttpError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected recipe payload");
        HttpError::from_rejection(rejection)
    })?;

    let recipe = state
        .recipes
        .create(input)
        .await
        .map_err(HttpError::from_create)?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
