use std::collections::HashMap;

use async_trait::async_trait;
use common::{
    BoardError, BoardResult, EngineFrame, EngineFramesResponse, EngineGameResponse, GameInfo,
};
use reqwest::Client;
use serde_json::from_str;
use tracing::{debug, warn};
use url::Url;

/// Source of game and frame records.
#[async_trait]
pub trait GameDataProvider: Send + Sync {
    async fn game(&self, game_id: &str) -> BoardResult<GameInfo>;

    async fn frame(&self, game_id: &str, turn: u32) -> BoardResult<EngineFrame>;
}

/// Battlesnake engine HTTP API.
#[derive(Clone)]
pub struct EngineClient {
    http: Client,
    base_url: Url,
}

impl EngineClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, segments: &[&str]) -> BoardResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BoardError::invalid_input(format!("engine URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> BoardResult<String> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| BoardError::transport(format!("request to {url} failed"), err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BoardError::transport_msg(format!(
                "{url} returned status {status}: {body}"
            )));
        }

        response
            .text()
            .await
            .map_err(|err| BoardError::transport(format!("failed to read body from {url}"), err))
    }
}

#[async_trait]
impl GameDataProvider for EngineClient {
    async fn game(&self, game_id: &str) -> BoardResult<GameInfo> {
        let url = self.endpoint(&["games", game_id])?;
        let body = self.get_text(url).await?;
        let response: EngineGameResponse = from_str(&body)
            .map_err(|err| BoardError::transport(format!("failed to parse game {game_id}"), err))?;
        Ok(response.game.into())
    }

    async fn frame(&self, game_id: &str, turn: u32) -> BoardResult<EngineFrame> {
        let mut url = self.endpoint(&["games", game_id, "frames"])?;
        url.query_pairs_mut()
            .append_pair("offset", &turn.to_string())
            .append_pair("limit", "1");

        let body = self.get_text(url).await?;
        let response: EngineFramesResponse = from_str(&body).map_err(|err| {
            BoardError::transport(format!("failed to parse frames of game {game_id}"), err)
        })?;

        let frame = response.frames.into_iter().next().ok_or_else(|| {
            BoardError::transport_msg(format!("game {game_id} has no frame for turn {turn}"))
        })?;
        if frame.turn != turn {
            warn!("Requested turn {} of game {} but got turn {}", turn, game_id, frame.turn);
        }
        Ok(frame)
    }
}

/// Provider over records already in memory, such as saved engine payloads.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    games: HashMap<String, (GameInfo, Vec<EngineFrame>)>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, game: GameInfo, frames: Vec<EngineFrame>) {
        self.games.insert(game.id.clone(), (game, frames));
    }

    fn lookup(&self, game_id: &str) -> BoardResult<&(GameInfo, Vec<EngineFrame>)> {
        self.games
            .get(game_id)
            .ok_or_else(|| BoardError::transport_msg(format!("unknown game {game_id}")))
    }
}

#[async_trait]
impl GameDataProvider for StaticProvider {
    async fn game(&self, game_id: &str) -> BoardResult<GameInfo> {
        Ok(self.lookup(game_id)?.0.clone())
    }

    async fn frame(&self, game_id: &str, turn: u32) -> BoardResult<EngineFrame> {
        let (_, frames) = self.lookup(game_id)?;
        frames
            .iter()
            .find(|frame| frame.turn == turn)
            .cloned()
            .ok_or_else(|| {
                BoardError::transport_msg(format!("game {game_id} has no frame for turn {turn}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() {
        let client = EngineClient::new(Url::parse("https://engine.battlesnake.com").unwrap());
        let url = client.endpoint(&["games", "abc-123", "frames"]).unwrap();
        assert_eq!(url.as_str(), "https://engine.battlesnake.com/games/abc-123/frames");

        let client = EngineClient::new(Url::parse("http://localhost:3005/api/").unwrap());
        let url = client.endpoint(&["games", "abc"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3005/api/games/abc");
    }
}
