use std::collections::HashMap;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::RequestError;
use crate::models::{
    HeroConstant, ItemConstant, MatchDetail, PlayerHeroStats, PlayerPeer, PlayerSummary,
    RecentMatch, WinLoss,
};

pub const DEFAULT_BASE_URL: &str = "https://api.opendota.com/api";

/// OpenDota REST client. Cheap to clone; every method issues exactly one GET.
#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for OpenDotaClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl OpenDotaClient {
    /// Creates a client for `base_url` (e.g. a mirror or a mock server). Trailing slashes are ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn heroes(&self) -> Result<Vec<HeroConstant>, RequestError> {
        self.get_json("/heroes").await
    }

    /// Item constants keyed by internal name. Entries that are not objects with an integer `id` are skipped.
    pub async fn items(&self) -> Result<HashMap<String, ItemConstant>, RequestError> {
        let raw: HashMap<String, serde_json::Value> = self.get_json("/constants/items").await?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| {
                serde_json::from_value::<ItemConstant>(value)
                    .ok()
                    .map(|item| (key, item))
            })
            .collect())
    }

    pub async fn player(&self, account_id: u64) -> Result<PlayerSummary, RequestError> {
        self.get_json(&format!("/players/{}", account_id)).await
    }

    pub async fn recent_matches(&self, account_id: u64) -> Result<Vec<RecentMatch>, RequestError> {
        self.get_json(&format!("/players/{}/recentMatches", account_id))
            .await
    }

    pub async fn win_loss(&self, account_id: u64) -> Result<WinLoss, RequestError> {
        self.get_json(&format!("/players/{}/wl", account_id)).await
    }

    pub async fn player_heroes(
        &self,
        account_id: u64,
    ) -> Result<Vec<PlayerHeroStats>, RequestError> {
        self.get_json(&format!("/players/{}/heroes", account_id))
            .await
    }

    pub async fn peers(&self, account_id: u64) -> Result<Vec<PlayerPeer>, RequestError> {
        self.get_json(&format!("/players/{}/peers", account_id))
            .await
    }

    pub async fn match_details(&self, match_id: u64) -> Result<MatchDetail, RequestError> {
        self.get_json(&format!("/matches/{}", match_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");
        let resp = self.client.get(&url).send().await?;
        match resp.status() {
            status if status.is_success() => {
                let content = resp.text().await?;
                serde_json::from_str(&content).map_err(|err| {
                    warn!(url = %url, error = %err, "undecodable OpenDota payload");
                    RequestError::Decode(err, content)
                })
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(url = %url, "OpenDota rate limit hit");
                Err(RequestError::Status(StatusCode::TOO_MANY_REQUESTS))
            }
            other => Err(RequestError::Status(other)),
        }
    }
}
