// src/pipeline/plays.rs
//
// Per team-game totals from play-by-play. Only regular-season plays with a
// possessing team count.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::{flag, Play, PlayByPlay, TeamGameKey};

pub const TURNOVER_COLUMNS: [&str; 7] =
    ["season", "week", "game_id", "posteam", "interception", "fumble_lost", "season_type"];

pub const OFFENSE_COLUMNS: [&str; 8] =
    ["season", "week", "game_id", "posteam", "rush", "pass", "yards_gained", "season_type"];

pub type PerGame = HashMap<TeamGameKey, i64>;

/// Interceptions thrown plus fumbles lost. A play flagged both ways counts twice.
pub fn turnovers_per_game(pbp: &PlayByPlay) -> Result<PerGame> {
    pbp.require(&TURNOVER_COLUMNS, "turnovers")?;
    Ok(sum_per_game(pbp, |p| Some(flag(p.interception) + flag(p.fumble_lost))))
}

/// Net yards on rush or pass plays; sacks and losses subtract.
pub fn offensive_yards_per_game(pbp: &PlayByPlay) -> Result<PerGame> {
    pbp.require(&OFFENSE_COLUMNS, "offensive yards")?;
    Ok(sum_per_game(pbp, |p| {
        let scrimmage = flag(p.rush) == 1 || flag(p.pass) == 1;
        scrimmage.then(|| flag(p.yards_gained))
    }))
}

fn sum_per_game(pbp: &PlayByPlay, value: impl Fn(&Play) -> Option<i64>) -> PerGame {
    let mut out = PerGame::new();
    for play in pbp.plays.iter().filter(|p| p.is_regular()) {
        let Some(key) = play.posteam_key() else { continue };
        let Some(v) = value(play) else { continue };
        *out.entry(key).or_default() += v;
    }
    out
}
