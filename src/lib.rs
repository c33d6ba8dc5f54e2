//! RosterHub core library
//!
//! Roster management for locally-persisted teams built from a remote
//! player directory: domain entities, the roster store (the Team <-> Player
//! relation owner), directory paging, snapshot storage, and the session
//! gate.

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod store;
