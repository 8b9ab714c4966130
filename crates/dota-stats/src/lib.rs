//! # dota-stats
//!
//! Turns OpenDota responses into the bot's reply texts and the per-minute gold/XP chart.
//!
//! - [`ReferenceData`]: hero and item name tables, loaded once and shared read-only.
//! - [`report`]: pure formatters from API models to reply text.
//! - [`chart`]: gold/XP line chart rendered to PNG bytes in memory.
//! - [`StatsService`]: fetch + format for one configured player; never returns an error,
//!   failures become fixed localized messages.

pub mod chart;
pub mod format;
pub mod messages;
pub mod outcome;
pub mod reference;
pub mod report;
mod service;

pub use chart::{ChartError, GoldXpChart, GoldXpSeries, SeriesPoint};
pub use outcome::{Outcome, Side};
pub use reference::{HeroTable, ItemTable, ReferenceData};
pub use report::{MatchAction, RecentMatchesReply};
pub use service::{StatsProvider, StatsService, DEFAULT_LIST_LIMIT};
