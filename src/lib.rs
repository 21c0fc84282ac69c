//! Recipe collection HTTP service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod recipes;
pub mod storage;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use recipes::{Recipe, RecipeService};
pub use storage::{JsonFileStore, MemoryStore, RecipeStore};
