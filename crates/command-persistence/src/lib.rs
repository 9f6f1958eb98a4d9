//! Persistence layer for the command resource service.
//!
//! This crate owns the `commands` table. [`CommandStore`] wraps a SQLite
//! connection pool created once at startup; every mutating operation runs in
//! its own transaction, which is rolled back if it is dropped before commit.
//!
//! # Example
//!
//! ```no_run
//! use command_models::NewCommand;
//! use command_persistence::CommandStore;
//!
//! # async fn run() -> command_persistence::Result<()> {
//! let store = CommandStore::connect("sqlite://commands.db", 5).await?;
//! store.migrate().await?;
//!
//! let created = store.create(NewCommand::new("build")).await?;
//! store.delete(created.id).await?;
//!
//! store.close().await;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod store;

pub use error::{PersistenceError, Result};
pub use store::CommandStore;
