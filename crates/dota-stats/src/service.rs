//! Fetch-and-format operations for the configured player.

use std::sync::Arc;

use async_trait::async_trait;
use opendota_client::OpenDotaClient;
use tracing::{info, instrument, warn};

use crate::chart::{self, GoldXpChart, GoldXpSeries};
use crate::messages;
use crate::reference::ReferenceData;
use crate::report::{self, RecentMatchesReply};

/// List length used by the chat buttons.
pub const DEFAULT_LIST_LIMIT: usize = 5;

/// Player statistics as ready-to-send replies. Implementations never fail: upstream problems
/// become fixed localized messages and a missing chart becomes `None`.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn profile(&self) -> String;
    async fn recent_matches(&self, limit: usize) -> RecentMatchesReply;
    /// Id of the most recent match, if the recent list could be fetched and is non-empty.
    async fn latest_match_id(&self) -> Option<u64>;
    async fn match_details(&self, match_id: u64) -> String;
    async fn gold_xp_chart(&self, match_id: u64) -> Option<GoldXpChart>;
    async fn win_loss(&self) -> String;
    async fn top_heroes(&self, limit: usize) -> String;
    async fn peers(&self, limit: usize) -> String;
}

/// [`StatsProvider`] backed by the OpenDota API and shared reference tables.
#[derive(Clone)]
pub struct StatsService {
    client: OpenDotaClient,
    reference: Arc<ReferenceData>,
    player_id: u64,
}

impl StatsService {
    pub fn new(client: OpenDotaClient, reference: Arc<ReferenceData>, player_id: u64) -> Self {
        Self {
            client,
            reference,
            player_id,
        }
    }
}

#[async_trait]
impl StatsProvider for StatsService {
    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn profile(&self) -> String {
        match self.client.player(self.player_id).await {
            Ok(summary) => report::profile(self.player_id, &summary),
            Err(e) => {
                warn!(error = %e, "profile request failed");
                messages::PROFILE_FAILED.to_string()
            }
        }
    }

    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn recent_matches(&self, limit: usize) -> RecentMatchesReply {
        match self.client.recent_matches(self.player_id).await {
            Ok(matches) => report::recent_matches(&matches, &self.reference.heroes, limit),
            Err(e) => {
                warn!(error = %e, "recent matches request failed");
                RecentMatchesReply::text_only(messages::RECENT_MATCHES_FAILED)
            }
        }
    }

    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn latest_match_id(&self) -> Option<u64> {
        match self.client.recent_matches(self.player_id).await {
            Ok(matches) => matches.first().map(|m| m.match_id),
            Err(e) => {
                warn!(error = %e, "recent matches request failed");
                None
            }
        }
    }

    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn match_details(&self, match_id: u64) -> String {
        match self.client.match_details(match_id).await {
            Ok(detail) => report::match_details(match_id, &detail, self.player_id, &self.reference),
            Err(e) => {
                warn!(error = %e, "match request failed");
                messages::MATCH_FAILED.to_string()
            }
        }
    }

    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn gold_xp_chart(&self, match_id: u64) -> Option<GoldXpChart> {
        let detail = match self.client.match_details(match_id).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(error = %e, "match request failed, no chart");
                return None;
            }
        };
        let Some(series) = detail.player(self.player_id).and_then(GoldXpSeries::from_player)
        else {
            info!("player or per-minute series missing, no chart");
            return None;
        };
        if series.is_empty() {
            info!("per-minute series empty, no chart");
            return None;
        }

        let to_render = series.clone();
        let rendered =
            tokio::task::spawn_blocking(move || chart::render_png(match_id, &to_render)).await;
        match rendered {
            Ok(Ok(png)) => {
                info!(minutes = series.len(), bytes = png.len(), "chart rendered");
                Some(GoldXpChart {
                    match_id,
                    series,
                    png,
                })
            }
            Ok(Err(e)) => {
                warn!(error = %e, "chart rendering failed");
                None
            }
            Err(e) => {
                warn!(error = %e, "chart rendering task failed");
                None
            }
        }
    }

    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn win_loss(&self) -> String {
        match self.client.win_loss(self.player_id).await {
            Ok(wl) => report::win_loss(&wl),
            Err(e) => {
                warn!(error = %e, "win/loss request failed");
                messages::WIN_LOSS_FAILED.to_string()
            }
        }
    }

    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn top_heroes(&self, limit: usize) -> String {
        match self.client.player_heroes(self.player_id).await {
            Ok(stats) => report::top_heroes(&stats, &self.reference.heroes, limit),
            Err(e) => {
                warn!(error = %e, "player heroes request failed");
                messages::TOP_HEROES_FAILED.to_string()
            }
        }
    }

    #[instrument(skip(self), fields(player_id = self.player_id))]
    async fn peers(&self, limit: usize) -> String {
        match self.client.peers(self.player_id).await {
            Ok(peers) => report::peers(&peers, limit),
            Err(e) => {
                warn!(error = %e, "peers request failed");
                messages::PEERS_FAILED.to_string()
            }
        }
    }
}
