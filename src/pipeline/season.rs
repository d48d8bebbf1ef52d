// src/pipeline/season.rs
//
// Team-game rows → one summary row per (season, team), restricted to a week window.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::model::{TeamGame, TeamSeasonSummary};

use super::playoffs::PlayoffTeams;
use super::plays::PerGame;

/// Per team-game totals from play-by-play, left-joined by game key.
#[derive(Debug, Default)]
pub struct PerGameTotals {
    pub turnovers: PerGame,
    pub offensive_yards: PerGame,
}

#[derive(Debug, Default)]
struct Tally {
    games: u32,
    wins: u32,
    point_diff: i32,
    division_wins: u32,
    turnovers: i64,
    offensive_yards: i64,
}

/// Aggregate the games inside `window`. Team-seasons without a game in the window
/// produce no row. Losses are games minus wins, so ties land on the loss side.
pub fn summarize(
    games: &[TeamGame],
    window: &RangeInclusive<u8>,
    per_game: &PerGameTotals,
    playoffs: &PlayoffTeams,
) -> Vec<TeamSeasonSummary> {
    let mut by_team: BTreeMap<(u16, String), Tally> = BTreeMap::new();

    for g in games.iter().filter(|g| window.contains(&g.week)) {
        let key = g.key();
        let t = by_team.entry((g.season, g.team.clone())).or_default();
        t.games += 1;
        t.wins += u32::from(g.is_win);
        t.point_diff += g.point_diff();
        t.division_wins += u32::from(g.is_division_win());
        t.turnovers += per_game.turnovers.get(&key).copied().unwrap_or(0);
        t.offensive_yards += per_game.offensive_yards.get(&key).copied().unwrap_or(0);
    }

    by_team
        .into_iter()
        .map(|((year, team), t)| {
            let made_playoffs = playoffs.contains(&(year, team.clone()));
            TeamSeasonSummary {
                year,
                team,
                wins: t.wins,
                losses: t.games - t.wins,
                point_differential: t.point_diff,
                turnovers: t.turnovers,
                division_wins: t.division_wins,
                offensive_yards: t.offensive_yards,
                made_playoffs,
            }
        })
        .collect()
}
