use crate::errors::BoardError;
use crate::models::ticket::BoardSnapshot;
use anyhow::{Context, Result};
use reqwest::Client;

pub struct BoardClient {
    client: Client,
    feed_url: String,
}

impl BoardClient {
    pub fn new(feed_url: String) -> Self {
        Self {
            client: Client::new(),
            feed_url,
        }
    }

    /// One read-only GET against the ticket feed. No retry, no auth.
    pub async fn fetch_board(&self) -> Result<BoardSnapshot> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(BoardError::from)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("{}", BoardError::FeedApiError(status.as_u16(), text));
        }

        let snapshot = response
            .json::<BoardSnapshot>()
            .await
            .context("Failed to parse the ticket feed response")?;

        Ok(snapshot)
    }
}
