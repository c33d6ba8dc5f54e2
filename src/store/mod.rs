// Roster store module
// Single source of truth for the Team <-> Player relation

pub mod roster_store;

pub use roster_store::{RosterError, RosterStore};
