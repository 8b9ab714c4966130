//! Fixed user-facing strings (Russian locale).

pub const PROFILE_FAILED: &str = "Ошибка при получении данных.";
pub const RECENT_MATCHES_FAILED: &str = "Ошибка при получении матчей.";
pub const MATCH_FAILED: &str = "Ошибка при получении данных о матче.";
pub const WIN_LOSS_FAILED: &str = "Ошибка получения статистики";
pub const TOP_HEROES_FAILED: &str = "Ошибка при получении топ героев.";
pub const PEERS_FAILED: &str = "Ошибка получения данных";

pub const PLAYER_NOT_IN_MATCH: &str = "Данные игрока не найдены в этом матче";

pub const UNKNOWN: &str = "Неизвестно";
pub const UNKNOWN_PEER: &str = "Unknown";
pub const NO_ITEMS: &str = "Нет предметов";

pub const WIN: &str = "✅ Победа";
pub const LOSS: &str = "❌ Поражение";
