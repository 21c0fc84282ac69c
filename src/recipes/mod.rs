//! Recipe domain and service.
//!
//! # Data Flow
//! ```text
//! POST body (NewRecipe)
//!     → validation.rs (presence checks, collects every missing field)
//!     → service.rs (writer lock, load, assign id, append, save)
//!     → id.rs (next id above every stored id)
//!     → Recipe returned to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - The store is injected as a trait object; the service never touches files
//! - Creations are serialized through one async mutex so concurrent appends
//!   cannot overwrite each other
//! - Reads are not serialized

pub mod id;
pub mod legacy;
pub mod model;
pub mod service;
pub mod validation;

pub use model::{Instructions, NewRecipe, Recipe, DEFAULT_DIFFICULTY};
pub use service::{RecipeService, ServiceError};
