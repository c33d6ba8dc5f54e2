use async_trait::async_trait;

use crate::domain::player::Player;

use super::{Cursor, DirectoryError, PlayerDirectory, PlayerPage};

// Fixed first players so the opening page is stable across runs.
const FIXED_PLAYERS: [(&str, &str); 10] = [
    ("test-player-1", "John Smith"),
    ("test-player-2", "Sarah Johnson"),
    ("test-player-3", "Mike Davis"),
    ("test-player-4", "Emma Wilson"),
    ("test-player-5", "David Brown"),
    ("test-player-6", "Lisa Garcia"),
    ("test-player-7", "James Miller"),
    ("test-player-8", "Anna Martinez"),
    ("test-player-9", "Chris Anderson"),
    ("test-player-10", "Jessica Taylor"),
];

const FIRST_NAMES: [&str; 20] = [
    "Alex", "Ryan", "Ashley", "Kevin", "Amanda", "Brian", "Stephanie", "Jason", "Michelle",
    "Daniel", "Nicole", "Matthew", "Jennifer", "Andrew", "Elizabeth", "Joshua", "Megan", "Tyler",
    "Samantha", "Brandon",
];

const LAST_NAMES: [&str; 20] = [
    "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
    "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee",
];

/// Deterministic in-process directory for development and tests
///
/// Serves a bounded population: ten fixed players followed by generated
/// ones, paged by a numeric offset cursor. The final page is short (or the
/// cursor is absent), exercising both termination conditions of the paging
/// contract.
#[derive(Debug, Clone)]
pub struct MockPlayerDirectory {
    page_size: usize,
    total: usize,
}

impl MockPlayerDirectory {
    /// Creates a mock directory with `total` players served `page_size` at
    /// a time
    pub fn new(page_size: usize, total: usize) -> Self {
        Self { page_size, total }
    }

    fn player_at(index: usize) -> Player {
        if let Some((id, name)) = FIXED_PLAYERS.get(index) {
            let mut player = Player::new(*id, *name);
            player.email = Some(format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            ));
            return player;
        }

        let first = FIRST_NAMES[index % FIRST_NAMES.len()];
        let last = LAST_NAMES[(index / FIRST_NAMES.len()) % LAST_NAMES.len()];
        Player::new(format!("player-{}", index + 1), format!("{first} {last}"))
    }
}

#[async_trait]
impl PlayerDirectory for MockPlayerDirectory {
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<PlayerPage, DirectoryError> {
        let offset: usize = cursor
            .map(|c| c.as_str().parse().unwrap_or(0))
            .unwrap_or(0);

        let end = (offset + self.page_size).min(self.total);
        let players: Vec<Player> = (offset..end).map(Self::player_at).collect();

        let next_cursor = if end < self.total {
            Some(Cursor::new(end.to_string()))
        } else {
            None
        };

        Ok(PlayerPage {
            players,
            next_cursor,
        })
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}
