use thiserror::Error;

use crate::directory::DirectoryError;
use crate::domain::errors::DomainError;
use crate::domain::player::PlayerId;
use crate::infrastructure::storage::StorageError;
use crate::store::RosterError;

use super::validation::FormErrors;

/// Application-level error taxonomy
///
/// Validation errors are user-correctable and carry per-field messages;
/// everything else is an infrastructure or referential failure surfaced to
/// the caller. None are fatal to the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {}", format_form_errors(.0))]
    Validation(FormErrors),

    #[error("Selected player not found: {0}")]
    UnknownPlayer(PlayerId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

fn format_form_errors(errors: &FormErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type AppResult<T> = Result<T, AppError>;
