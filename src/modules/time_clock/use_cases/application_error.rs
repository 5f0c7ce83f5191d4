use thiserror::Error;

use crate::modules::time_clock::core::decision::{DecideError, ErrorKind};
use crate::shared::infrastructure::event_store::EventStoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("projection failed: {0}")]
    Projection(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    pub fn unexpected(error: anyhow::Error) -> Self {
        tracing::error!(%error, "infrastructure failure");
        ApplicationError::Unexpected(error.to_string())
    }

    /// `None` for infrastructure failures the caller cannot correct.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ApplicationError::Domain(reason) => Some(reason.kind()),
            ApplicationError::NotFound(_) => Some(ErrorKind::NotFound),
            ApplicationError::Validation(_) => Some(ErrorKind::Validation),
            ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. }) => {
                Some(ErrorKind::InvalidState)
            }
            ApplicationError::VersionConflict(EventStoreError::Backend(_))
            | ApplicationError::Projection(_)
            | ApplicationError::Unexpected(_) => None,
        }
    }
}
