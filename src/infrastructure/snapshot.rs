use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::team::Team;
use crate::store::RosterStore;

use super::storage::{KeyValueStorage, StorageError};

/// Storage key holding the serialized roster state
pub const TEAM_STORAGE_KEY: &str = "team-storage";

/// Storage key holding the serialized user session
pub const USER_STORAGE_KEY: &str = "user-storage";

/// Serialized form of the whole roster store
///
/// The entire state is written under one key after every mutation and fully
/// rehydrated on startup.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub saved_at: DateTime<Utc>,
}

impl RosterSnapshot {
    pub fn capture(store: &RosterStore) -> Self {
        Self {
            teams: store.teams().to_vec(),
            players: store.players().to_vec(),
            saved_at: Utc::now(),
        }
    }

    pub fn restore(self) -> RosterStore {
        RosterStore::from_parts(self.teams, self.players)
    }
}

/// Rehydrates the roster store from storage
///
/// A missing key yields an empty store (first run); a present key must
/// decode, otherwise the error propagates rather than silently discarding
/// user data.
pub fn load_roster(storage: &dyn KeyValueStorage) -> Result<RosterStore, StorageError> {
    match storage.load(TEAM_STORAGE_KEY)? {
        Some(blob) => {
            let snapshot: RosterSnapshot = serde_json::from_str(&blob)?;
            tracing::info!(
                teams = snapshot.teams.len(),
                players = snapshot.players.len(),
                "roster snapshot hydrated"
            );
            Ok(snapshot.restore())
        }
        None => {
            tracing::info!("no roster snapshot found, starting empty");
            Ok(RosterStore::new())
        }
    }
}

/// Persists the full roster store under its storage key
pub fn save_roster(storage: &dyn KeyValueStorage, store: &RosterStore) -> Result<(), StorageError> {
    let blob = serde_json::to_string(&RosterSnapshot::capture(store))?;
    storage.save(TEAM_STORAGE_KEY, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Country, Region, TeamName};
    use crate::infrastructure::storage::InMemoryStorage;

    #[test]
    fn empty_storage_hydrates_an_empty_store() {
        let storage = InMemoryStorage::new();
        let store = load_roster(&storage).unwrap();
        assert!(store.teams().is_empty());
        assert!(store.players().is_empty());
    }

    #[test]
    fn snapshot_round_trips_full_state() {
        let storage = InMemoryStorage::new();
        let mut store = RosterStore::new();
        store.sync_players(vec![
            Player::new("p1", "Alex Johnson"),
            Player::new("p2", "Sarah Chen"),
        ]);
        let p1 = store
            .get_player_by_id(&crate::domain::PlayerId::new("p1"))
            .unwrap()
            .clone();
        let team = Team::new(
            TeamName::new("Alpha").unwrap(),
            2,
            Region::Europe,
            Country::France,
            vec![p1],
        )
        .unwrap();
        let team_id = team.id();
        store.add_team(team);

        save_roster(&storage, &store).unwrap();
        let rehydrated = load_roster(&storage).unwrap();

        assert_eq!(rehydrated.teams().len(), 1);
        assert_eq!(rehydrated.players().len(), 2);
        assert_eq!(rehydrated.get_players_in_team(team_id).len(), 1);
        assert!(rehydrated.is_team_name_unique("Beta", None));
        assert!(!rehydrated.is_team_name_unique("alpha", None));
    }

    #[test]
    fn corrupt_snapshot_is_an_error_not_a_reset() {
        let storage = InMemoryStorage::new();
        storage.save(TEAM_STORAGE_KEY, "not json").unwrap();

        assert!(matches!(
            load_roster(&storage),
            Err(StorageError::Serde(_))
        ));
    }
}
