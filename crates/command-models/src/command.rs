//! Command types.
//!
//! A [`Command`] is a single persisted row. Its identifier is assigned by the
//! datastore at insert time and never changes afterwards.

use serde::{Deserialize, Serialize};

/// Identifier of a persisted command, assigned by the datastore.
pub type CommandId = i64;

/// Maximum length of a command name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of a command description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// A persisted command row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Datastore-assigned identifier.
    pub id: CommandId,

    /// Command name.
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validated fields for a command that has not been inserted yet.
///
/// Values are kept exactly as the client sent them; the store inserts them
/// without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommand {
    /// Command name, not blank.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,
}

impl NewCommand {
    /// Creates a new command value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
