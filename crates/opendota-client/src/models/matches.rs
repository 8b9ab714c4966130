use serde::Deserialize;

/// Entry of `GET /players/{id}/recentMatches`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentMatch {
    pub match_id: u64,
    #[serde(default)]
    pub hero_id: Option<i64>,
    #[serde(default)]
    pub kills: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default)]
    pub assists: Option<i64>,
    #[serde(default)]
    pub player_slot: Option<i64>,
    #[serde(default)]
    pub radiant_win: Option<bool>,
    /// Seconds.
    #[serde(default)]
    pub duration: Option<i64>,
}

/// `GET /matches/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchDetail {
    #[serde(default)]
    pub match_id: Option<u64>,
    /// Seconds.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub radiant_win: Option<bool>,
    #[serde(default)]
    pub players: Vec<MatchPlayer>,
}

impl MatchDetail {
    /// First player whose account id equals `account_id`. Anonymous players carry no id and never match.
    pub fn player(&self, account_id: u64) -> Option<&MatchPlayer> {
        self.players
            .iter()
            .find(|p| p.account_id == Some(account_id))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPlayer {
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub hero_id: Option<i64>,
    #[serde(default)]
    pub player_slot: Option<i64>,
    #[serde(default)]
    pub kills: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default)]
    pub assists: Option<i64>,
    #[serde(default)]
    pub gold: Option<i64>,
    #[serde(default)]
    pub net_worth: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub total_xp: Option<i64>,
    #[serde(default)]
    pub xp: Option<i64>,
    #[serde(default)]
    pub last_hits: Option<i64>,
    #[serde(default)]
    pub denies: Option<i64>,
    #[serde(default)]
    pub hero_damage: Option<i64>,
    #[serde(default)]
    pub tower_damage: Option<i64>,
    #[serde(default)]
    pub hero_healing: Option<i64>,
    #[serde(default)]
    pub gold_per_min: Option<i64>,
    #[serde(default)]
    pub xp_per_min: Option<i64>,
    #[serde(default)]
    pub item_0: Option<i64>,
    #[serde(default)]
    pub item_1: Option<i64>,
    #[serde(default)]
    pub item_2: Option<i64>,
    #[serde(default)]
    pub item_3: Option<i64>,
    #[serde(default)]
    pub item_4: Option<i64>,
    #[serde(default)]
    pub item_5: Option<i64>,
    /// Gold at each minute mark; only present for parsed matches.
    #[serde(default)]
    pub gold_t: Option<Vec<i64>>,
    /// Experience at each minute mark; only present for parsed matches.
    #[serde(default)]
    pub xp_t: Option<Vec<i64>>,
}

impl MatchPlayer {
    /// Experience: `total_xp`, falling back to `xp`.
    pub fn experience(&self) -> i64 {
        self.total_xp.or(self.xp).unwrap_or(0)
    }

    /// The six inventory slots in order.
    pub fn inventory(&self) -> [Option<i64>; 6] {
        [
            self.item_0,
            self.item_1,
            self.item_2,
            self.item_3,
            self.item_4,
            self.item_5,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_player_tolerates_nulls_and_missing_fields() {
        let player: MatchPlayer = serde_json::from_str(
            r#"{"account_id": null, "hero_id": 1, "gold_t": null, "item_0": 0}"#,
        )
        .unwrap();
        assert_eq!(player.account_id, None);
        assert_eq!(player.hero_id, Some(1));
        assert!(player.gold_t.is_none());
        assert!(player.xp_t.is_none());
        assert_eq!(player.inventory()[0], Some(0));
        assert_eq!(player.inventory()[5], None);
    }

    #[test]
    fn test_experience_prefers_total_xp() {
        let both = MatchPlayer {
            total_xp: Some(25_000),
            xp: Some(12),
            ..Default::default()
        };
        let only_xp = MatchPlayer {
            xp: Some(12),
            ..Default::default()
        };
        assert_eq!(both.experience(), 25_000);
        assert_eq!(only_xp.experience(), 12);
        assert_eq!(MatchPlayer::default().experience(), 0);
    }

    #[test]
    fn test_player_lookup_by_account_id() {
        let detail = MatchDetail {
            players: vec![
                MatchPlayer {
                    account_id: None,
                    hero_id: Some(2),
                    ..Default::default()
                },
                MatchPlayer {
                    account_id: Some(86745912),
                    hero_id: Some(74),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(detail.player(86745912).and_then(|p| p.hero_id), Some(74));
        assert!(detail.player(1).is_none());
    }
}
