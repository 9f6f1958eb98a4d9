//! Command store backed by a SQLite connection pool.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use command_models::{Command, CommandId, NewCommand};

use crate::error::{PersistenceError, Result};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SELECT_ALL: &str = "SELECT id, name, description FROM commands ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, description FROM commands WHERE id = ?";

/// Raw row as read from the `commands` table.
#[derive(Debug, sqlx::FromRow)]
struct CommandRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<CommandRow> for Command {
    fn from(row: CommandRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

/// Persists commands in the `commands` table.
///
/// The store is the process-wide session factory: it is created once, cloned
/// into request handlers (clones share the pool) and closed at shutdown.
#[derive(Debug, Clone)]
pub struct CommandStore {
    pool: SqlitePool,
}

impl CommandStore {
    /// Wraps an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `url`, creating the database file if it is missing.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|source| PersistenceError::InvalidUrl {
                url: url.to_string(),
                source,
            })?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        info!(url = %url, max_connections, "Opened command database");
        Ok(Self::new(pool))
    }

    /// Opens a private in-memory database.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        debug!("Command schema is up to date");
        Ok(())
    }

    /// Checks that a connection can be acquired and used.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Lists every command, ordered by id.
    pub async fn list(&self) -> Result<Vec<Command>> {
        let rows: Vec<CommandRow> = sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Command::from).collect())
    }

    /// Inserts a command and returns the row as stored, including its id.
    pub async fn create(&self, new: NewCommand) -> Result<Command> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query("INSERT INTO commands (name, description) VALUES (?, ?)")
            .bind(&new.name)
            .bind(&new.description)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        // Re-read so datastore-side values are what the caller sees.
        let row: CommandRow = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(command_id = id, name = %row.name, "Created command");
        Ok(Command::from(row))
    }

    /// Deletes a command by id and returns the removed row.
    ///
    /// Fails with [`PersistenceError::NotFound`] and changes nothing if the
    /// id does not exist.
    pub async fn delete(&self, id: CommandId) -> Result<Command> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<CommandRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = existing else {
            debug!(command_id = id, "Delete target missing");
            return Err(PersistenceError::command_not_found(id));
        };

        sqlx::query("DELETE FROM commands WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(command_id = id, "Deleted command");
        Ok(Command::from(row))
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
