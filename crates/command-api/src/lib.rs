//! REST API for the command resource.
//!
//! Exposes list, create and delete over the `commands` table:
//! - `GET /commands` lists every command
//! - `POST /commands` validates a payload and inserts a command
//! - `DELETE /commands/:id` removes a command and returns the remaining list
//! - `GET /health` reports liveness and datastore reachability
//!
//! # Example
//!
//! ```ignore
//! use command_api::{ApiConfig, AppState, serve};
//! use command_persistence::CommandStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CommandStore::connect("sqlite://commands.db", 5).await?;
//!     store.migrate().await?;
//!
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone(), store);
//!
//!     serve(config, state, std::future::pending()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
