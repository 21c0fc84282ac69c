//! HTTP endpoint layer.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request id, tracing, metrics,
//!       timeout, body limit, CORS)
//!     → handlers.rs (GET/POST /api/recipes)
//!     → RecipeService
//!     → error.rs (fixed status/message pairs on failure)
//!     → JSON response to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::HttpError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
