use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::player::Player;

use super::{Cursor, DirectoryError, PlayerDirectory, PlayerPage};

/// Wire shape of one player record from the remote directory
#[derive(Debug, Deserialize)]
struct ApiPlayer {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiMeta {
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Vec<ApiPlayer>,
    meta: ApiMeta,
}

/// HTTP implementation of [`PlayerDirectory`]
///
/// Talks to the hosted player API: cursor and page size go in the query
/// string, the API key in the `Authorization` header. Responses carry the
/// records under `data` and the next cursor under `meta.next_cursor`
/// (`null` at end of data).
pub struct HttpPlayerDirectory {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    season: u16,
    page_size: usize,
}

impl HttpPlayerDirectory {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        season: u16,
        page_size: usize,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            season,
            page_size,
        }
    }
}

#[async_trait]
impl PlayerDirectory for HttpPlayerDirectory {
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<PlayerPage, DirectoryError> {
        let mut query: Vec<(&str, String)> = vec![
            ("season", self.season.to_string()),
            ("per_page", self.page_size.to_string()),
        ];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.as_str().to_string()));
        }

        tracing::debug!(cursor = cursor.map(Cursor::as_str), "fetching player page");

        let response = self
            .client
            .get(&self.base_url)
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::UnexpectedStatus(status.as_u16()));
        }

        let body: ApiResponse = response.json().await?;

        Ok(PlayerPage {
            players: body
                .data
                .into_iter()
                .map(|p| Player::new(p.id.to_string(), p.name))
                .collect(),
            next_cursor: body.meta.next_cursor.map(Cursor::new),
        })
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}
