//! Request DTOs for the API.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use command_models::NewCommand;

/// Create command request.
///
/// Fields the request does not declare are ignored. Values are checked as
/// sent and stored unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommandRequest {
    /// Command name.
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    /// Optional description.
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub description: Option<String>,
}

impl From<CreateCommandRequest> for NewCommand {
    fn from(req: CreateCommandRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
