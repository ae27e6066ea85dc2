use thiserror::Error;

use crate::types::{ApplicationId, CreditStatus};

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("application not found: {id}")]
    NotFound {
        id: ApplicationId,
    },

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: CreditStatus,
        to: CreditStatus,
    },
}

impl DeskError {
    /// name of the offending form field, if this is a validation failure
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DeskError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
