use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable player identity assigned by the Player Directory
///
/// Directory identifiers are treated as opaque strings: the store never
/// parses or orders them, only compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player known to the roster store
///
/// Players originate from the Player Directory and are never deleted by the
/// store. `team_id` is the sole source of truth for team membership; the
/// owning team's name is resolved at read time from the team collection
/// rather than cached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Uuid>,
}

impl Player {
    /// Creates an unassigned player as it arrives from the directory
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Player {
            id: PlayerId::new(id),
            name: name.into(),
            email: None,
            avatar: None,
            team_id: None,
        }
    }

    /// Returns true if the player is not assigned to any team
    pub fn is_available(&self) -> bool {
        self.team_id.is_none()
    }
}

/// A player paired with the display name of its owning team
///
/// The team name is derived from the team collection at read time, so a
/// renamed or deleted team can never leave a stale name behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub player: Player,
    pub team_name: Option<String>,
}
