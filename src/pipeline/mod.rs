// src/pipeline/mod.rs
//! # Season summary pipeline
//!
//! Pure in-memory stages, in run order:
//!
//! ```text
//! schedules ─ reshape::team_games ─ reshape::tag_divisions ─┐
//!                                                           ├ season::summarize ─ rows
//! play-by-play ─ plays::turnovers_per_game ─────────────────┤
//!              ─ plays::offensive_yards_per_game ───────────┤
//! schedules ─ playoffs::playoff_teams ──────────────────────┘
//! ```
//!
//! Every relational step is a projection, filter, group-by or left join over plain
//! `Vec`s and maps. Left joins fill explicitly: missing per-game totals read as 0,
//! missing playoff appearances as "N". Grouping uses ordered maps so output order
//! (Year, Team) never depends on input order.

pub mod playoffs;
pub mod plays;
pub mod reshape;
pub mod season;

use std::ops::RangeInclusive;

use crate::error::Result;
use crate::model::{PlayByPlay, ScheduleRow, TeamSeasonSummary};

/// All stages in one call.
pub fn build_summary(
    schedules: &[ScheduleRow],
    pbp: &PlayByPlay,
    window: &RangeInclusive<u8>,
) -> Result<Vec<TeamSeasonSummary>> {
    let mut games = reshape::team_games(schedules);
    reshape::tag_divisions(&mut games);

    let per_game = season::PerGameTotals {
        turnovers: plays::turnovers_per_game(pbp)?,
        offensive_yards: plays::offensive_yards_per_game(pbp)?,
    };
    let playoffs = playoffs::playoff_teams(schedules);

    Ok(season::summarize(&games, window, &per_game, &playoffs))
}
