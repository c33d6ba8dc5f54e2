use thiserror::Error;
use uuid::Uuid;

use crate::domain::player::{Player, PlayerId, RosterEntry};
use crate::domain::team::Team;

/// Errors raised by roster store mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),
}

/// Single source of truth for the Team <-> Player relation
///
/// All mutations go through this store. Players are owned by at most one
/// team at a time; `Player::team_id` is the authoritative side of the
/// relation, while each team's `players` list is a point-in-time snapshot
/// for display.
///
/// The store is synchronous and single-threaded by design: every operation
/// runs to completion within one event-handling turn, so no interior
/// locking is needed. Persistence is the caller's concern; the store itself
/// only holds in-memory state.
#[derive(Debug, Default, Clone)]
pub struct RosterStore {
    teams: Vec<Team>,
    players: Vec<Player>,
}

impl RosterStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a store from persisted state
    ///
    /// Bypasses invariant checks: the data was validated before it was
    /// persisted. Only to be used when rehydrating a snapshot.
    pub fn from_parts(teams: Vec<Team>, players: Vec<Player>) -> Self {
        Self { teams, players }
    }

    // ===== Team mutations =====

    /// Appends a team and assigns its selected players
    ///
    /// # Precondition
    /// The caller must have verified name uniqueness via
    /// [`is_team_name_unique`](Self::is_team_name_unique); this method
    /// inserts unconditionally.
    pub fn add_team(&mut self, team: Team) {
        let player_ids: Vec<PlayerId> = team.players().iter().map(|p| p.id.clone()).collect();
        let team_id = team.id();

        tracing::debug!(team = %team.name(), players = player_ids.len(), "adding team");
        self.teams.push(team);
        self.assign_players_to_team(&player_ids, team_id);
    }

    /// Replaces a team record and reassigns its roster
    ///
    /// Every player currently assigned to `team_id` is detached first, then
    /// every player listed in the replacement's roster is attached. The
    /// detach-then-reattach order guarantees that a player moved off the
    /// team in this update does not retain a stale assignment.
    ///
    /// # Errors
    /// Returns [`RosterError::TeamNotFound`] if `team_id` matches no team;
    /// the store is left untouched in that case.
    pub fn update_team(&mut self, team_id: Uuid, updated_team: Team) -> Result<(), RosterError> {
        let slot = self
            .teams
            .iter_mut()
            .find(|t| t.id() == team_id)
            .ok_or(RosterError::TeamNotFound(team_id))?;

        let player_ids: Vec<PlayerId> =
            updated_team.players().iter().map(|p| p.id.clone()).collect();
        *slot = updated_team;

        self.remove_players_from_team(team_id);
        self.assign_players_to_team(&player_ids, team_id);
        Ok(())
    }

    /// Deletes a team, detaching its players
    ///
    /// Detachment happens before removal and is keyed by `team_id` value,
    /// not by team record presence. Detached players become unassigned,
    /// never deleted.
    ///
    /// # Errors
    /// Returns [`RosterError::TeamNotFound`] if `team_id` matches no team.
    pub fn delete_team(&mut self, team_id: Uuid) -> Result<(), RosterError> {
        if !self.teams.iter().any(|t| t.id() == team_id) {
            return Err(RosterError::TeamNotFound(team_id));
        }

        self.remove_players_from_team(team_id);
        self.teams.retain(|t| t.id() != team_id);
        Ok(())
    }

    // ===== Player mutations =====

    /// Merges directory players into the store, returning how many were new
    ///
    /// Only players not already known by id are appended; existing players
    /// are never overwritten, so a repeated sync with the same identities
    /// is a no-op for those identities. Known limitation: a changed name
    /// for an already-known player will not be picked up.
    pub fn sync_players(&mut self, new_players: Vec<Player>) -> usize {
        let mut added: Vec<Player> = Vec::new();
        for player in new_players {
            // A duplicated id within the batch itself counts as known too.
            let known = self.get_player_by_id(&player.id).is_some()
                || added.iter().any(|p| p.id == player.id);
            if !known {
                added.push(player);
            }
        }

        let count = added.len();
        if count > 0 {
            tracing::debug!(count, "synced new players from directory");
        }
        self.players.extend(added);
        count
    }

    /// Sets `team_id` on every listed player
    pub fn assign_players_to_team(&mut self, player_ids: &[PlayerId], team_id: Uuid) {
        for player in &mut self.players {
            if player_ids.contains(&player.id) {
                player.team_id = Some(team_id);
            }
        }
    }

    /// Clears `team_id` on every player assigned to the given team
    pub fn remove_players_from_team(&mut self, team_id: Uuid) {
        for player in &mut self.players {
            if player.team_id == Some(team_id) {
                player.team_id = None;
            }
        }
    }

    /// Sets or clears a single player's assignment
    pub fn update_player_team_status(&mut self, player_id: &PlayerId, team_id: Option<Uuid>) {
        if let Some(player) = self.players.iter_mut().find(|p| &p.id == player_id) {
            player.team_id = team_id;
        }
    }

    // ===== Queries =====

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_team_by_id(&self, team_id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == team_id)
    }

    pub fn get_player_by_id(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == player_id)
    }

    /// Players selectable for a team form
    ///
    /// Returns every unassigned player. When `exclude_team_id` is given,
    /// the players already on that team are included too, so an edit form
    /// can show the team's current members as selected.
    pub fn get_available_players(&self, exclude_team_id: Option<Uuid>) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| {
                p.team_id.is_none()
                    || (exclude_team_id.is_some() && p.team_id == exclude_team_id)
            })
            .collect()
    }

    /// Case-insensitive name uniqueness check
    ///
    /// `exclude_team_id` skips the team being renamed so an unchanged name
    /// still validates during an update.
    pub fn is_team_name_unique(&self, name: &str, exclude_team_id: Option<Uuid>) -> bool {
        !self.teams.iter().any(|team| {
            team.name().eq_ignore_case(name) && Some(team.id()) != exclude_team_id
        })
    }

    /// Players currently assigned to the given team
    pub fn get_players_in_team(&self, team_id: Uuid) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.team_id == Some(team_id))
            .collect()
    }

    /// All players paired with their owning team's display name
    ///
    /// The team name is resolved from the team collection at call time, so
    /// renames and deletions are always reflected.
    pub fn roster_entries(&self) -> Vec<RosterEntry> {
        self.players
            .iter()
            .map(|player| RosterEntry {
                player: player.clone(),
                team_name: self.team_name_of(player),
            })
            .collect()
    }

    /// Resolves the display name of a player's owning team, if any
    pub fn team_name_of(&self, player: &Player) -> Option<String> {
        let team_id = player.team_id?;
        self.get_team_by_id(team_id)
            .map(|t| t.name().as_str().to_string())
    }
}
