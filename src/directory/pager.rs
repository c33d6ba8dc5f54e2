use crate::store::RosterStore;

use super::{Cursor, DirectoryError, PlayerDirectory, PlayerPage};

/// Returns true when a page terminates paging
///
/// Both a missing next cursor and a short page mean "no more data"; a short
/// page terminates even if a cursor value is technically present.
pub fn is_last_page(page: &PlayerPage, page_size: usize) -> bool {
    page.next_cursor.is_none() || page.players.len() < page_size
}

/// Incremental paging state over a [`PlayerDirectory`]
///
/// Drives the infinite-scroll contract: call [`next_page`](Self::next_page)
/// until it yields `None`. A fetch error leaves the pager's position
/// unchanged so the same page can be retried.
#[derive(Debug, Default)]
pub struct DirectoryPager {
    cursor: Option<Cursor>,
    finished: bool,
}

impl DirectoryPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the directory may still have more pages
    pub fn has_next_page(&self) -> bool {
        !self.finished
    }

    /// Fetches the next page, or `None` once the directory is exhausted
    pub async fn next_page(
        &mut self,
        directory: &dyn PlayerDirectory,
    ) -> Result<Option<PlayerPage>, DirectoryError> {
        if self.finished {
            return Ok(None);
        }

        let page = directory.fetch_page(self.cursor.as_ref()).await?;

        if is_last_page(&page, directory.page_size()) {
            self.finished = true;
        } else {
            self.cursor = page.next_cursor.clone();
        }

        Ok(Some(page))
    }

    /// Resets the pager to the first page
    pub fn reset(&mut self) {
        self.cursor = None;
        self.finished = false;
    }
}

/// Pages through the whole directory, merging every page into the store
///
/// Returns the number of players newly added. Each page is merged as soon
/// as it arrives, so a mid-run fetch failure keeps everything synced so
/// far; the error is surfaced for the caller's retry affordance.
pub async fn sync_all(
    directory: &dyn PlayerDirectory,
    store: &mut RosterStore,
) -> Result<usize, DirectoryError> {
    let mut pager = DirectoryPager::new();
    let mut added = 0;

    while let Some(page) = pager.next_page(directory).await? {
        added += store.sync_players(page.players);
    }

    tracing::info!(added, total = store.players().len(), "directory sync complete");
    Ok(added)
}
