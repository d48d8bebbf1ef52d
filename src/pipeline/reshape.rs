// src/pipeline/reshape.rs
//
// Schedule rows → team-game rows, then division tags.

use crate::divisions::division_of;
use crate::model::{ScheduleRow, TeamGame};

#[derive(Clone, Copy)]
enum Side {
    Home,
    Away,
}

/// Two rows per regular-season game: every home side, then every away side.
pub fn team_games(schedules: &[ScheduleRow]) -> Vec<TeamGame> {
    let regular: Vec<&ScheduleRow> = schedules.iter().filter(|r| r.is_regular()).collect();

    let home = regular.iter().map(|r| side_of(r, Side::Home));
    let away = regular.iter().map(|r| side_of(r, Side::Away));
    home.chain(away).collect()
}

fn side_of(row: &ScheduleRow, side: Side) -> TeamGame {
    let (team, opp, points_for, points_against) = match side {
        Side::Home => (&row.home_team, &row.away_team, row.home_score, row.away_score),
        Side::Away => (&row.away_team, &row.home_team, row.away_score, row.home_score),
    };
    // Strictly greater: a tie (or an unplayed game) is nobody's win.
    let is_win = matches!((points_for, points_against), (Some(pf), Some(pa)) if pf > pa);

    TeamGame {
        season: row.season,
        week: row.week,
        game_id: row.game_id.clone(),
        team: team.clone(),
        opp: opp.clone(),
        points_for,
        points_against,
        is_win,
        team_division: None,
        opp_division: None,
    }
}

/// Attach both sides' divisions. Unknown codes stay None.
pub fn tag_divisions(games: &mut [TeamGame]) {
    for g in games {
        g.team_division = division_of(&g.team);
        g.opp_division = division_of(&g.opp);
    }
}
