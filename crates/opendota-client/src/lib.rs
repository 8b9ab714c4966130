//! # opendota-client
//!
//! Async client for the OpenDota API endpoints the bot reads: hero and item constants, player
//! profile, recent matches, win/loss, hero and peer aggregates, and full match details.

mod client;
mod error;
pub mod models;

pub use client::{OpenDotaClient, DEFAULT_BASE_URL};
pub use error::RequestError;
pub use models::{
    HeroConstant, ItemConstant, MatchDetail, MatchPlayer, MmrEstimate, PlayerHeroStats, PlayerPeer,
    PlayerProfile, PlayerSummary, RecentMatch, WinLoss,
};
