//! # dota-handlers
//!
//! Handlers for the stats bot: [`DotaStatsHandler`] maps keyboard captions, `/start` and match
//! buttons to stats replies; [`LoggingHandler`] logs every update.

mod command;
mod logging;
mod stats_handler;

#[cfg(test)]
mod test;

pub use command::{main_keyboard, BotCommand, GREETING, UNKNOWN_INPUT};
pub use logging::LoggingHandler;
pub use stats_handler::DotaStatsHandler;
