use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored recipe as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub ingredients: Vec<String>,
    /// Either a single string or a list of steps, as submitted.
    pub instructions: serde_json::Value,
    pub cook_time: String,
    pub difficulty: String,
}

/// Body for `POST /api/recipes`. Unset fields are left out of the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl NewRecipe {
    /// Recipe with the three required fields set and instructions as a single text.
    pub fn new(title: &str, ingredients: &[&str], instructions: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ingredients: Some(ingredients.iter().map(|i| i.to_string()).collect()),
            instructions: Some(serde_json::Value::String(instructions.to_string())),
            ..Self::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status. `message` is the
    /// `error` field of the response body when present.
    #[error("service returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct RecipeClient {
    client: Client,
    base_url: String,
}

impl RecipeClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every stored recipe in insertion order.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, SdkError> {
        let resp = self
            .client
            .get(format!("{}/api/recipes", self.base_url))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Create a recipe and return it with its assigned id and defaults.
    pub async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, SdkError> {
        let resp = self
            .client
            .post(format!("{}/api/recipes", self.base_url))
            .json(recipe)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

async fn check(resp: Response) -> Result<Response, SdkError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await?;
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) => text,
    };
    Err(SdkError::Status { status, message })
}
