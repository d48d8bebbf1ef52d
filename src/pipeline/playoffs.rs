// src/pipeline/playoffs.rs
use std::collections::BTreeSet;

use crate::model::ScheduleRow;

/// (season, team) pairs with at least one postseason appearance, home or away.
pub type PlayoffTeams = BTreeSet<(u16, String)>;

pub fn playoff_teams(schedules: &[ScheduleRow]) -> PlayoffTeams {
    let mut out = PlayoffTeams::new();
    for row in schedules.iter().filter(|r| !r.is_regular()) {
        for team in [&row.home_team, &row.away_team] {
            if !team.is_empty() {
                out.insert((row.season, team.clone()));
            }
        }
    }
    out
}
