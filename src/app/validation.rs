use std::collections::BTreeMap;
use std::str::FromStr;

use uuid::Uuid;

use crate::domain::player::PlayerId;
use crate::domain::value_objects::{Country, Region};
use crate::store::RosterStore;

/// Raw team form input as the presentation layer collects it
///
/// Everything arrives as strings; `player_count` in particular is the raw
/// text-field value and is parsed during validation.
#[derive(Debug, Clone, Default)]
pub struct TeamForm {
    pub name: String,
    pub player_count: String,
    pub region: String,
    pub country: String,
    pub selected_players: Vec<PlayerId>,
}

/// Field-keyed validation messages, surfaced inline next to each field
///
/// An empty map means the form is valid. Messages are never thrown.
pub type FormErrors = BTreeMap<&'static str, String>;

/// Validates a team form against the store's current state
///
/// `exclude_team_id` is the team being edited, so its own name still passes
/// the uniqueness check on an unchanged rename.
///
/// # Rules
/// - Name non-empty and unique (case-insensitive) among all teams
/// - Player count parses to an integer of at least 1
/// - Region and country drawn from their closed lists
/// - At least one player selected
/// - Selection does not exceed the declared player count
pub fn validate_team_form(
    form: &TeamForm,
    store: &RosterStore,
    exclude_team_id: Option<Uuid>,
) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Team name is required".to_string());
    } else if !store.is_team_name_unique(form.name.trim(), exclude_team_id) {
        errors.insert("name", "Team name must be unique".to_string());
    }

    let player_count = form.player_count.trim().parse::<u32>().ok();
    match player_count {
        Some(count) if count >= 1 => {}
        _ => {
            errors.insert("playerCount", "Player count must be at least 1".to_string());
        }
    }

    if form.region.is_empty() {
        errors.insert("region", "Region is required".to_string());
    } else if Region::from_str(&form.region).is_err() {
        errors.insert("region", format!("Unknown region: {}", form.region));
    }

    if form.country.is_empty() {
        errors.insert("country", "Country is required".to_string());
    } else if Country::from_str(&form.country).is_err() {
        errors.insert("country", format!("Unknown country: {}", form.country));
    }

    if form.selected_players.is_empty() {
        errors.insert("players", "At least one player must be selected".to_string());
    } else if let Some(count) = player_count {
        if count >= 1 && form.selected_players.len() > count as usize {
            errors.insert(
                "players",
                format!("Cannot select more than {count} players"),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Player;
    use crate::domain::team::Team;
    use crate::domain::value_objects::TeamName;

    fn store_with_team(name: &str) -> RosterStore {
        let mut store = RosterStore::new();
        store.sync_players(vec![Player::new("p1", "Alex Johnson")]);
        store.add_team(
            Team::new(
                TeamName::new(name).unwrap(),
                5,
                Region::Europe,
                Country::France,
                vec![],
            )
            .unwrap(),
        );
        store
    }

    fn valid_form() -> TeamForm {
        TeamForm {
            name: "Beta".to_string(),
            player_count: "2".to_string(),
            region: "Europe".to_string(),
            country: "France".to_string(),
            selected_players: vec![PlayerId::new("p1")],
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let store = store_with_team("Alpha");
        assert!(validate_team_form(&valid_form(), &store, None).is_empty());
    }

    #[test]
    fn blank_name_is_required() {
        let store = RosterStore::new();
        let form = TeamForm {
            name: "   ".to_string(),
            ..valid_form()
        };
        let errors = validate_team_form(&form, &store, None);
        assert_eq!(errors.get("name").map(String::as_str), Some("Team name is required"));
    }

    #[test]
    fn duplicate_name_is_rejected_case_insensitively() {
        let store = store_with_team("Alpha");
        let form = TeamForm {
            name: "alpha".to_string(),
            ..valid_form()
        };
        let errors = validate_team_form(&form, &store, None);
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Team name must be unique")
        );
    }

    #[test]
    fn own_name_passes_when_editing() {
        let store = store_with_team("Alpha");
        let team_id = store.teams()[0].id();
        let form = TeamForm {
            name: "ALPHA".to_string(),
            ..valid_form()
        };
        assert!(validate_team_form(&form, &store, Some(team_id)).is_empty());
    }

    #[test]
    fn player_count_must_parse_and_be_positive() {
        let store = RosterStore::new();
        for bad in ["", "0", "-1", "abc"] {
            let form = TeamForm {
                player_count: bad.to_string(),
                ..valid_form()
            };
            let errors = validate_team_form(&form, &store, None);
            assert_eq!(
                errors.get("playerCount").map(String::as_str),
                Some("Player count must be at least 1"),
                "player_count={bad:?}"
            );
        }
    }

    #[test]
    fn region_and_country_are_required() {
        let store = RosterStore::new();
        let form = TeamForm {
            region: String::new(),
            country: String::new(),
            ..valid_form()
        };
        let errors = validate_team_form(&form, &store, None);
        assert_eq!(errors.get("region").map(String::as_str), Some("Region is required"));
        assert_eq!(
            errors.get("country").map(String::as_str),
            Some("Country is required")
        );
    }

    #[test]
    fn region_and_country_must_be_on_the_closed_lists() {
        let store = RosterStore::new();
        let form = TeamForm {
            region: "Atlantis".to_string(),
            country: "Narnia".to_string(),
            ..valid_form()
        };
        let errors = validate_team_form(&form, &store, None);
        assert!(errors.contains_key("region"));
        assert!(errors.contains_key("country"));
    }

    #[test]
    fn at_least_one_player_must_be_selected() {
        let store = RosterStore::new();
        let form = TeamForm {
            selected_players: vec![],
            ..valid_form()
        };
        let errors = validate_team_form(&form, &store, None);
        assert_eq!(
            errors.get("players").map(String::as_str),
            Some("At least one player must be selected")
        );
    }

    #[test]
    fn selection_cannot_exceed_declared_count() {
        let store = RosterStore::new();
        let form = TeamForm {
            player_count: "1".to_string(),
            selected_players: vec![PlayerId::new("p1"), PlayerId::new("p2")],
            ..valid_form()
        };
        let errors = validate_team_form(&form, &store, None);
        assert_eq!(
            errors.get("players").map(String::as_str),
            Some("Cannot select more than 1 players")
        );
    }
}
