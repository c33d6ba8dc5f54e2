// Application layer module (command handlers and the form contract)
// Sits between presentation and the roster store: validates input, applies
// the mutation, persists the snapshot.

pub mod errors;
pub mod service;
pub mod validation;

pub use errors::AppError;
pub use service::RosterService;
pub use validation::{validate_team_form, FormErrors, TeamForm};
