//! Record store subsystem.
//!
//! # Data Flow
//! ```text
//! RecipeService
//!     → RecipeStore::load_all (whole collection, insertion order)
//!     → mutate in memory
//!     → RecipeStore::save_all (whole collection replaces previous contents)
//! ```
//!
//! # Design Decisions
//! - A missing backing file is an empty collection, not an error
//! - Every other failure (permissions, malformed data) is a `StoreError`
//! - No retries, no locking; serialization of writers lives in the service

pub mod json_file;
pub mod memory;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::recipes::Recipe;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by a [`RecipeStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed recipe data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode recipes: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backend refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for the full recipe collection.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every stored recipe in insertion order.
    async fn load_all(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Replace the stored collection with `recipes`.
    async fn save_all(&self, recipes: &[Recipe]) -> Result<(), StoreError>;
}
