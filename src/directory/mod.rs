// Player directory module (port + adapters)
// The directory is an external, cursor-paged source of player records; the
// store only ever consumes it through the one-way sync in `pager`.

pub mod http;
pub mod mock;
pub mod pager;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::player::Player;

/// Opaque pagination token identifying the next page boundary
///
/// Cursors are never parsed or compared for order; they are handed back to
/// the directory verbatim on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Cursor(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of directory results
#[derive(Debug, Clone)]
pub struct PlayerPage {
    pub players: Vec<Player>,
    /// Absent means the directory has signalled end of data
    pub next_cursor: Option<Cursor>,
}

/// Errors raised while fetching from the player directory
///
/// A fetch error never touches store state; callers surface it as a retry
/// affordance.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Directory returned status {0}")]
    UnexpectedStatus(u16),
}

/// Port for the external player directory
///
/// # Contract
/// - Request by opaque cursor, absent for the first page
/// - A page returns an ordered list of players plus either a next cursor or
///   the absence of one (end of data)
/// - Paging also terminates on a short page: fewer records than
///   `page_size` means "no more data" even if a cursor is present
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Fetches one page of players starting at `cursor`
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<PlayerPage, DirectoryError>;

    /// The page size this directory serves, used for short-page detection
    fn page_size(&self) -> usize;
}
