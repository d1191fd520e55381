//! HTTP API over the metro network core.

pub mod api;
pub mod config;
pub mod state;

pub use api::create_router;
pub use config::{ConfigError, ServerConfig};
pub use state::AppState;
