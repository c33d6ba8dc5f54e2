use thiserror::Error;

/// Errors raised while constructing domain entities and value objects
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Team name is required")]
    EmptyTeamName,

    #[error("Player count must be at least 1")]
    InvalidPlayerCount,

    #[error("Cannot select more than {capacity} players (got {selected})")]
    RosterOverCapacity { selected: usize, capacity: u32 },

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Display name is required")]
    EmptyDisplayName,
}

pub type DomainResult<T> = Result<T, DomainError>;
