use std::str::FromStr;

use uuid::Uuid;

use crate::directory::{pager, PlayerDirectory};
use crate::domain::errors::DomainError;
use crate::domain::player::Player;
use crate::domain::team::Team;
use crate::domain::value_objects::{Country, Region, TeamName};
use crate::infrastructure::snapshot::{load_roster, save_roster};
use crate::infrastructure::storage::{KeyValueStorage, StorageError};
use crate::store::RosterStore;

use super::errors::{AppError, AppResult};
use super::validation::{validate_team_form, TeamForm};

/// Command handler over the roster store
///
/// Owns the store instance and its storage handle: every command validates
/// its input, applies the mutation synchronously, and writes the full
/// snapshot before returning. The in-memory state stays applied even when
/// the snapshot write fails; the previous snapshot is the recovery
/// fallback.
pub struct RosterService<S: KeyValueStorage> {
    store: RosterStore,
    storage: S,
}

impl<S: KeyValueStorage> RosterService<S> {
    /// Hydrates a service from the persisted snapshot
    pub fn hydrate(storage: S) -> Result<Self, StorageError> {
        let store = load_roster(&storage)?;
        Ok(Self { store, storage })
    }

    /// Read access to the underlying store for queries
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Creates a team from validated form input
    ///
    /// # Errors
    /// * [`AppError::Validation`] with field-keyed messages on bad input
    /// * [`AppError::UnknownPlayer`] if a selected id is not in the store
    pub fn create_team(&mut self, form: &TeamForm) -> AppResult<Uuid> {
        let errors = validate_team_form(form, &self.store, None);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let team = self.build_team(None, form)?;
        let team_id = team.id();
        self.store.add_team(team);
        self.persist()?;

        tracing::info!(%team_id, "team created");
        Ok(team_id)
    }

    /// Replaces an existing team with the form's full state
    ///
    /// The team's current members count as selectable during validation, so
    /// keeping them (or the unchanged name) still validates.
    pub fn update_team(&mut self, team_id: Uuid, form: &TeamForm) -> AppResult<()> {
        let errors = validate_team_form(form, &self.store, Some(team_id));
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let team = self.build_team(Some(team_id), form)?;
        self.store.update_team(team_id, team)?;
        self.persist()?;

        tracing::info!(%team_id, "team updated");
        Ok(())
    }

    /// Deletes a team; its players become unassigned
    pub fn delete_team(&mut self, team_id: Uuid) -> AppResult<()> {
        self.store.delete_team(team_id)?;
        self.persist()?;

        tracing::info!(%team_id, "team deleted");
        Ok(())
    }

    /// Pages the whole directory into the store
    ///
    /// The snapshot is written once at the end; a fetch error surfaces for
    /// the caller's retry affordance and leaves already-known players
    /// untouched.
    pub async fn sync_from_directory(
        &mut self,
        directory: &dyn PlayerDirectory,
    ) -> AppResult<usize> {
        let added = pager::sync_all(directory, &mut self.store).await?;
        if added > 0 {
            self.persist()?;
        }
        Ok(added)
    }

    fn build_team(&self, team_id: Option<Uuid>, form: &TeamForm) -> AppResult<Team> {
        let mut players: Vec<Player> = Vec::with_capacity(form.selected_players.len());
        for player_id in &form.selected_players {
            let player = self
                .store
                .get_player_by_id(player_id)
                .ok_or_else(|| AppError::UnknownPlayer(player_id.clone()))?;
            players.push(player.clone());
        }

        let name = TeamName::new(form.name.as_str())?;
        let player_count: u32 = form
            .player_count
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPlayerCount)?;
        let region = Region::from_str(&form.region)?;
        let country = Country::from_str(&form.country)?;

        let team = match team_id {
            Some(id) => Team::with_id(id, name, player_count, region, country, players)?,
            None => Team::new(name, player_count, region, country, players)?,
        };
        Ok(team)
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_roster(&self.storage, &self.store)
    }
}
