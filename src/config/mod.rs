//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServiceConfig::default()
//!     → loader.rs (optional TOML file)
//!     → loader.rs (PORT / RECIPES_DATA_FILE environment overrides)
//!     → command-line flags
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the service runs with no config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::{
    CorsConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, StorageConfig,
    TimeoutConfig,
};
