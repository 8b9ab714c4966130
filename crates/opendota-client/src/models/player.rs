use serde::Deserialize;

/// `GET /players/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSummary {
    #[serde(default)]
    pub profile: Option<PlayerProfile>,
    #[serde(default)]
    pub mmr_estimate: Option<MmrEstimate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerProfile {
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub profileurl: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MmrEstimate {
    /// Kept as a JSON number so it prints exactly as the API sent it.
    #[serde(default)]
    pub estimate: Option<serde_json::Number>,
}

/// `GET /players/{id}/wl`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WinLoss {
    #[serde(default)]
    pub win: u64,
    #[serde(default)]
    pub lose: u64,
}

/// Entry of `GET /players/{id}/heroes`, ranked by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerHeroStats {
    pub hero_id: i64,
    #[serde(default)]
    pub games: u64,
    #[serde(default)]
    pub win: u64,
}

/// Entry of `GET /players/{id}/peers`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPeer {
    pub account_id: u64,
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub with_games: u64,
    #[serde(default)]
    pub with_win: u64,
}
