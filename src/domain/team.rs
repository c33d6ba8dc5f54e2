use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;
use super::player::Player;
use super::value_objects::{Country, Region, TeamName};

/// Team aggregate root
///
/// A team owns an ordered roster of player snapshots. The snapshots are a
/// point-in-time copy taken when the team was created or last updated; the
/// authoritative membership relation is each player's `team_id` in the
/// roster store.
///
/// # Invariants
/// - Name is non-empty (enforced by [`TeamName`])
/// - Declared player count is at least 1
/// - The assigned roster never exceeds the declared player count at
///   creation/update time
/// - Name uniqueness is a store-level concern checked by callers before
///   insertion, not re-validated here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: Uuid,
    name: TeamName,
    player_count: u32,
    region: Region,
    country: Country,
    players: Vec<Player>,
}

impl Team {
    /// Creates a new Team aggregate with a freshly generated id
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a v4 UUID identity
    /// * `Err(DomainError)` - If any invariant is violated
    ///
    /// # Business Rules Enforced
    /// - Player count must be at least 1
    /// - Selected roster must not exceed the declared player count
    pub fn new(
        name: TeamName,
        player_count: u32,
        region: Region,
        country: Country,
        players: Vec<Player>,
    ) -> Result<Self, DomainError> {
        Self::with_id(Uuid::new_v4(), name, player_count, region, country, players)
    }

    /// Creates a Team with a caller-supplied identity
    ///
    /// Used when building the full replacement record for an update, where
    /// the existing team's id must be preserved.
    pub fn with_id(
        id: Uuid,
        name: TeamName,
        player_count: u32,
        region: Region,
        country: Country,
        players: Vec<Player>,
    ) -> Result<Self, DomainError> {
        if player_count < 1 {
            return Err(DomainError::InvalidPlayerCount);
        }

        if players.len() > player_count as usize {
            return Err(DomainError::RosterOverCapacity {
                selected: players.len(),
                capacity: player_count,
            });
        }

        Ok(Self {
            id,
            name,
            player_count,
            region,
            country,
            players,
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// The roster snapshot captured at creation/update time
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> TeamName {
        TeamName::new(s).unwrap()
    }

    #[test]
    fn create_team_with_valid_inputs() {
        let players = vec![Player::new("p1", "Alex Johnson")];
        let team = Team::new(name("Alpha"), 2, Region::Europe, Country::Germany, players);

        assert!(team.is_ok());
        let team = team.unwrap();
        assert_eq!(team.name().as_str(), "Alpha");
        assert_eq!(team.player_count(), 2);
        assert_eq!(team.region(), Region::Europe);
        assert_eq!(team.country(), Country::Germany);
        assert_eq!(team.players().len(), 1);
    }

    #[test]
    fn create_team_with_zero_player_count_fails() {
        let result = Team::new(name("Alpha"), 0, Region::Asia, Country::Japan, vec![]);
        assert!(matches!(result, Err(DomainError::InvalidPlayerCount)));
    }

    #[test]
    fn create_team_over_capacity_fails() {
        let players = vec![
            Player::new("p1", "Alex Johnson"),
            Player::new("p2", "Sarah Chen"),
        ];
        let result = Team::new(name("Alpha"), 1, Region::Asia, Country::Japan, players);

        assert!(matches!(
            result,
            Err(DomainError::RosterOverCapacity {
                selected: 2,
                capacity: 1
            })
        ));
    }

    #[test]
    fn new_teams_get_distinct_ids() {
        let a = Team::new(name("Alpha"), 1, Region::Europe, Country::France, vec![]).unwrap();
        let b = Team::new(name("Beta"), 1, Region::Europe, Country::France, vec![]).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn with_id_preserves_identity() {
        let id = Uuid::new_v4();
        let team =
            Team::with_id(id, name("Alpha"), 1, Region::Europe, Country::France, vec![]).unwrap();
        assert_eq!(team.id(), id);
    }

    #[test]
    fn team_round_trips_through_json() {
        let players = vec![Player::new("p1", "Alex Johnson")];
        let team = Team::new(
            name("Alpha"),
            3,
            Region::SouthAmerica,
            Country::Brazil,
            players,
        )
        .unwrap();

        let json = serde_json::to_string(&team).unwrap();
        let back: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(back, team);
    }
}
