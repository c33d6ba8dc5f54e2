// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod player;
pub mod team;
pub mod user;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::DomainError;
pub use player::{Player, PlayerId, RosterEntry};
pub use team::Team;
pub use user::{Email, User};
pub use value_objects::{Country, Region, TeamName};
