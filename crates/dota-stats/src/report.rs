//! Reply texts built from API models. No I/O; every function is deterministic given its inputs.

use std::fmt::Write;

use opendota_client::{
    MatchDetail, MatchPlayer, PlayerHeroStats, PlayerPeer, PlayerSummary, RecentMatch, WinLoss,
};

use crate::format::{format_number, minutes, win_rate};
use crate::messages;
use crate::outcome::{Outcome, Side};
use crate::reference::{HeroTable, ItemTable, ReferenceData};

/// Prefix of the callback payload carried by a per-match button.
pub const MATCH_ACTION_PREFIX: &str = "match_";

/// One selectable "show details" action attached to the recent-matches reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchAction {
    pub match_id: u64,
}

impl MatchAction {
    pub fn label(&self) -> String {
        format!("📖 Детали матча {}", self.match_id)
    }

    pub fn callback_data(&self) -> String {
        format!("{}{}", MATCH_ACTION_PREFIX, self.match_id)
    }

    /// Parses a `match_<id>` payload.
    pub fn from_callback_data(data: &str) -> Option<Self> {
        data.strip_prefix(MATCH_ACTION_PREFIX)?
            .parse()
            .ok()
            .map(|match_id| Self { match_id })
    }
}

/// Recent matches text plus one action per listed match, in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentMatchesReply {
    pub text: String,
    pub actions: Vec<MatchAction>,
}

impl RecentMatchesReply {
    /// A reply with no actions (used for upstream failures).
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: Vec::new(),
        }
    }
}

pub fn profile(player_id: u64, summary: &PlayerSummary) -> String {
    let profile = summary.profile.as_ref();
    let name = profile
        .and_then(|p| p.personaname.as_deref())
        .unwrap_or(messages::UNKNOWN);
    let mmr = summary
        .mmr_estimate
        .as_ref()
        .and_then(|m| m.estimate.as_ref())
        .map(|n| n.to_string())
        .unwrap_or_else(|| messages::UNKNOWN.to_string());
    let url = profile
        .and_then(|p| p.profileurl.clone())
        .unwrap_or_else(|| format!("https://www.opendota.com/players/{}", player_id));

    format!("👤 Ник: {}\n🏆 MMR: {}\n🔗 Профиль: {}", name, mmr, url)
}

/// Lists the first `limit` matches in upstream order.
pub fn recent_matches(
    matches: &[RecentMatch],
    heroes: &HeroTable,
    limit: usize,
) -> RecentMatchesReply {
    let mut text = String::from("📊 Последние матчи:\n\n");
    let mut actions = Vec::new();

    for m in matches.iter().take(limit) {
        let outcome = Outcome::derive(m.radiant_win, m.player_slot.unwrap_or(0));
        let _ = write!(
            text,
            "🎮 Матч {}\nГерой: {}\nK/D/A: {}/{}/{}\n⌛ {:.1} мин\n{}\n\n",
            m.match_id,
            heroes.name(m.hero_id.unwrap_or(0)),
            m.kills.unwrap_or(0),
            m.deaths.unwrap_or(0),
            m.assists.unwrap_or(0),
            minutes(m.duration.unwrap_or(0)),
            outcome,
        );
        actions.push(MatchAction {
            match_id: m.match_id,
        });
    }

    RecentMatchesReply { text, actions }
}

/// Detailed report for `player_id` in one match, or the not-found message when the player is absent.
pub fn match_details(
    match_id: u64,
    detail: &MatchDetail,
    player_id: u64,
    reference: &ReferenceData,
) -> String {
    match detail.player(player_id) {
        Some(player) => player_report(match_id, detail, player, reference),
        None => messages::PLAYER_NOT_IN_MATCH.to_string(),
    }
}

fn player_report(
    match_id: u64,
    detail: &MatchDetail,
    p: &MatchPlayer,
    reference: &ReferenceData,
) -> String {
    let slot = p.player_slot.unwrap_or(0);
    let side = Side::from_player_slot(slot);
    let outcome = Outcome::derive(detail.radiant_win, slot);
    let items = item_names(p, &reference.items);
    let items = if items.is_empty() {
        messages::NO_ITEMS.to_string()
    } else {
        items.join(", ")
    };
    let n = |v: Option<i64>| v.unwrap_or(0);

    format!(
        "🎮 Матч {match_id}\n\
         🧙 Герой: {hero} ({side})\n\
         🏆 Результат: {outcome}\n\n\
         ⚔️ K/D/A: {k}/{d}/{a}\n\
         💰 Текущее золото: {gold}\n\
         💎 Networth: {net_worth}\n\
         📊 Уровень: {level}\n\
         🌟 Опыт: {xp}\n\
         🎯 Ластхиты/Денаи: {lh}/{dn}\n\
         📈 GPM/XPM: {gpm}/{xpm}\n\n\
         🔥 Урон по героям: {hero_damage}\n\
         🏰 Урон по towers: {tower_damage}\n\
         ❤️ Лечение: {healing}\n\
         ⌛ Длительность: {duration:.1} мин\n\
         🎒 Предметы: {items}",
        hero = reference.heroes.name(n(p.hero_id)),
        k = n(p.kills),
        d = n(p.deaths),
        a = n(p.assists),
        gold = format_number(n(p.gold)),
        net_worth = format_number(n(p.net_worth)),
        level = n(p.level),
        xp = format_number(p.experience()),
        lh = n(p.last_hits),
        dn = n(p.denies),
        gpm = n(p.gold_per_min),
        xpm = n(p.xp_per_min),
        hero_damage = format_number(n(p.hero_damage)),
        tower_damage = format_number(n(p.tower_damage)),
        healing = format_number(n(p.hero_healing)),
        duration = minutes(n(detail.duration)),
    )
}

/// Names of occupied inventory slots; empty slots (missing or id ≤ 0) are skipped.
pub fn item_names(player: &MatchPlayer, items: &ItemTable) -> Vec<String> {
    player
        .inventory()
        .into_iter()
        .flatten()
        .filter(|id| *id > 0)
        .map(|id| items.name(id).into_owned())
        .collect()
}

pub fn win_loss(wl: &WinLoss) -> String {
    let rate = win_rate(wl.win, wl.win + wl.lose);
    format!(
        "📈 Общая статистика:\n✅ Побед: {}\n❌ Поражений: {}\n🏆 Винрейт: {:.1}%",
        wl.win, wl.lose, rate
    )
}

/// First `limit` heroes in the API's ranking.
pub fn top_heroes(stats: &[PlayerHeroStats], heroes: &HeroTable, limit: usize) -> String {
    let mut text = String::from("🏅 Топ герои:\n\n");
    for h in stats.iter().take(limit) {
        let _ = writeln!(
            text,
            "{}: {}/{} побед ({}%)",
            heroes.name(h.hero_id),
            h.win,
            h.games,
            hero_rate(h)
        );
    }
    text
}

/// A hero with no games reads `0%` rather than a formatted zero.
fn hero_rate(h: &PlayerHeroStats) -> String {
    if h.games == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", win_rate(h.win, h.games))
    }
}

pub fn peers(peers: &[PlayerPeer], limit: usize) -> String {
    let mut text = String::from("👥 Частые соратники:\n\n");
    for (i, peer) in peers.iter().take(limit).enumerate() {
        let _ = writeln!(
            text,
            "{}. {}\n   Игр вместе: {} | Побед: {} ({:.1}%)",
            i + 1,
            peer.personaname.as_deref().unwrap_or(messages::UNKNOWN_PEER),
            peer.with_games,
            peer.with_win,
            win_rate(peer.with_win, peer.with_games)
        );
    }
    text
}
