//! Response models. Fields the API may omit or send as `null` are `Option`s; callers pick their
//! own fallbacks when formatting.

mod constants;
mod matches;
mod player;

pub use constants::{HeroConstant, ItemConstant};
pub use matches::{MatchDetail, MatchPlayer, RecentMatch};
pub use player::{MmrEstimate, PlayerHeroStats, PlayerPeer, PlayerProfile, PlayerSummary, WinLoss};
