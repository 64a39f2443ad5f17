//! Ranch orchestration.
//!
//! This crate ties the domain crates together: configuration loading,
//! the [`RanchContext`] holding all live state, world-event hooks,
//! the player-facing command surface, scoreboard rendering, and the
//! async timers driving the day cycle.

pub mod command;
pub mod config;
pub mod context;
pub mod display;
pub mod hooks;
pub mod scheduler;

pub use command::{
    choose_profession, dispatch_farm_command, CommandHost, CommandOutcome, CommandReply,
    FarmSubcommand,
};
pub use config::{ConfigError, RanchConfig};
pub use context::RanchContext;
pub use display::{farm_scoreboard, market_scoreboard, FarmScoreboard, MarketScoreboard};
pub use hooks::{on_account_join, on_block_mutation_attempt, JoinStatus};
pub use scheduler::{run_timers, NoOpCallback, SchedulerCallback, TimerIntervals};
