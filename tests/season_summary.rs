// tests/season_summary.rs
//
// Whole-pipeline properties on synthetic schedules and play-by-play, no I/O.
//
use nfl_weeks1_6::config::consts::WEEK_WINDOW;
use nfl_weeks1_6::model::{Play, PlayByPlay, ScheduleRow, TeamSeasonSummary};
use nfl_weeks1_6::pipeline::{build_summary, plays};

fn game(season: u16, week: u8, game_type: &str, home: &str, away: &str, hs: Option<u16>, as_: Option<u16>) -> ScheduleRow {
    ScheduleRow {
        season,
        week,
        game_id: format!("{season}_{week:02}_{away}_{home}"),
        game_type: game_type.into(),
        home_team: home.into(),
        away_team: away.into(),
        home_score: hs,
        away_score: as_,
    }
}

fn reg(week: u8, home: &str, away: &str, hs: u16, as_: u16) -> ScheduleRow {
    game(2020, week, "REG", home, away, Some(hs), Some(as_))
}

fn play(game_id: &str, week: u8, posteam: &str) -> Play {
    Play {
        season: Some(2020),
        week: Some(week),
        game_id: Some(game_id.into()),
        season_type: Some("REG".into()),
        posteam: Some(posteam.into()),
        ..Play::default()
    }
}

fn pbp(list: Vec<Play>) -> PlayByPlay {
    let mut cols: Vec<&str> = plays::TURNOVER_COLUMNS.to_vec();
    cols.extend(plays::OFFENSE_COLUMNS);
    PlayByPlay::new(cols, list)
}

fn row<'a>(rows: &'a [TeamSeasonSummary], team: &str) -> &'a TeamSeasonSummary {
    rows.iter().find(|r| r.team == team).unwrap_or_else(|| panic!("no row for {team}"))
}

#[test]
fn two_wins_one_pick_150_yards_and_a_playoff_game() {
    let schedule = vec![
        reg(1, "AAA", "BBB", 27, 17),
        reg(2, "CCC", "AAA", 14, 21),
        game(2020, 19, "WC", "AAA", "DDD", Some(24), Some(20)),
    ];
    let plays = pbp(vec![
        Play { pass: Some(1.0), interception: Some(1.0), yards_gained: Some(0.0), ..play("2020_01_BBB_AAA", 1, "AAA") },
        Play { rush: Some(1.0), yards_gained: Some(100.0), ..play("2020_01_BBB_AAA", 1, "AAA") },
        Play { pass: Some(1.0), yards_gained: Some(50.0), ..play("2020_01_BBB_AAA", 1, "AAA") },
    ]);

    let rows = build_summary(&schedule, &plays, &WEEK_WINDOW).unwrap();
    let aaa = row(&rows, "AAA");
    assert_eq!(aaa.year, 2020);
    assert_eq!((aaa.wins, aaa.losses), (2, 0));
    assert_eq!(aaa.point_differential, 17);
    assert_eq!(aaa.turnovers, 1);
    // AAA is not a league code, so no opponent shares its division
    assert_eq!(aaa.division_wins, 0);
    assert_eq!(aaa.offensive_yards, 150);
    assert!(aaa.made_playoffs);

    // Postseason-only appearances produce no row
    assert!(rows.iter().all(|r| r.team != "DDD"));
    assert!(!row(&rows, "BBB").made_playoffs);
}

#[test]
fn same_fixture_with_a_divisional_opponent_counts_one_division_win() {
    let schedule = vec![
        reg(1, "KC", "LV", 27, 17),
        reg(2, "NO", "KC", 14, 21),
        game(2020, 19, "WC", "KC", "PIT", Some(24), Some(20)),
    ];
    let plays = pbp(vec![
        Play { pass: Some(1.0), interception: Some(1.0), yards_gained: Some(0.0), ..play("2020_01_LV_KC", 1, "KC") },
        Play { rush: Some(1.0), yards_gained: Some(100.0), ..play("2020_01_LV_KC", 1, "KC") },
        Play { pass: Some(1.0), yards_gained: Some(50.0), ..play("2020_01_LV_KC", 1, "KC") },
    ]);

    let rows = build_summary(&schedule, &plays, &WEEK_WINDOW).unwrap();
    let kc = row(&rows, "KC");
    assert_eq!((kc.wins, kc.losses), (2, 0));
    assert_eq!(kc.point_differential, 17);
    assert_eq!(kc.turnovers, 1);
    // LV shares the AFC West, NO does not
    assert_eq!(kc.division_wins, 1);
    assert_eq!(kc.offensive_yards, 150);
    assert!(kc.made_playoffs);

    let lv = row(&rows, "LV");
    assert_eq!((lv.wins, lv.division_wins, lv.point_differential), (0, 0, -10));
    assert!(!lv.made_playoffs);
}

#[test]
fn division_win_counts_when_opponent_shares_division() {
    let schedule = vec![reg(1, "KC", "LV", 27, 17), reg(2, "NO", "KC", 14, 21)];
    let rows = build_summary(&schedule, &pbp(vec![]), &WEEK_WINDOW).unwrap();
    let kc = row(&rows, "KC");
    assert_eq!(kc.wins, 2);
    assert_eq!(kc.division_wins, 1);
}

#[test]
fn tie_is_counted_as_a_loss_for_both_sides() {
    let rows = build_summary(&[reg(3, "DAL", "WAS", 23, 23)], &pbp(vec![]), &WEEK_WINDOW).unwrap();
    for r in &rows {
        assert_eq!((r.wins, r.losses), (0, 1), "{}", r.team);
        assert_eq!(r.point_differential, 0);
        assert_eq!(r.division_wins, 0);
    }
}

#[test]
fn point_differentials_mirror_and_records_stay_bounded() {
    let schedule = vec![
        reg(1, "BUF", "NYJ", 27, 17),
        reg(2, "MIA", "BUF", 28, 31),
        reg(3, "BUF", "LA", 35, 32),
        reg(4, "TEN", "BUF", 42, 16),
        reg(5, "BUF", "KC", 17, 26),
        reg(6, "NYJ", "BUF", 10, 18),
        reg(7, "NE", "BUF", 21, 24),
        reg(1, "NE", "MIA", 21, 11),
    ];
    let rows = build_summary(&schedule, &pbp(vec![]), &WEEK_WINDOW).unwrap();

    let buf = row(&rows, "BUF");
    assert_eq!(buf.wins + buf.losses, 6);
    assert_eq!((buf.wins, buf.losses), (4, 2));
    assert_eq!(buf.point_differential, 10 + 3 + 3 - 26 - 9 + 8);
    assert_eq!(buf.division_wins, 3);

    let nyj = row(&rows, "NYJ");
    assert_eq!(nyj.point_differential, -10 - 8);

    for r in &rows {
        assert!(r.wins + r.losses <= 6);
        assert!(r.division_wins <= r.wins);
    }

    // Week 1 NE/MIA game: exact negatives
    let ne = row(&rows, "NE");
    let mia_week1 = 11 - 21;
    assert_eq!(ne.point_differential, -mia_week1);
}

#[test]
fn teams_without_plays_get_zero_not_missing() {
    let schedule = vec![reg(1, "SEA", "SF", 20, 13)];
    let plays = pbp(vec![Play { rush: Some(1.0), yards_gained: Some(9.0), ..play("2020_01_SF_SEA", 1, "SEA") }]);
    let rows = build_summary(&schedule, &plays, &WEEK_WINDOW).unwrap();
    let sf = row(&rows, "SF");
    assert_eq!((sf.turnovers, sf.offensive_yards), (0, 0));
    assert_eq!(row(&rows, "SEA").offensive_yards, 9);
}

#[test]
fn plays_outside_window_or_schedule_are_not_counted() {
    let schedule = vec![reg(1, "GB", "CHI", 10, 3), reg(8, "GB", "CHI", 10, 3)];
    let plays = pbp(vec![
        Play { rush: Some(1.0), yards_gained: Some(5.0), ..play("2020_01_CHI_GB", 1, "GB") },
        Play { rush: Some(1.0), yards_gained: Some(70.0), ..play("2020_08_CHI_GB", 8, "GB") },
        Play { rush: Some(1.0), yards_gained: Some(80.0), ..play("2020_03_XXX_GB", 3, "GB") },
    ]);
    let rows = build_summary(&schedule, &plays, &WEEK_WINDOW).unwrap();
    assert_eq!(row(&rows, "GB").offensive_yards, 5);
}

#[test]
fn unplayed_game_counts_as_loss_with_no_points() {
    let schedule = vec![
        reg(1, "DEN", "LAC", 24, 21),
        game(2020, 2, "REG", "LAC", "DEN", None, None),
    ];
    let rows = build_summary(&schedule, &pbp(vec![]), &WEEK_WINDOW).unwrap();
    let den = row(&rows, "DEN");
    assert_eq!((den.wins, den.losses, den.point_differential), (1, 1, 3));
}

#[test]
fn made_playoffs_is_per_season() {
    let schedule = vec![
        game(2019, 1, "REG", "HOU", "IND", Some(20), Some(10)),
        game(2019, 20, "DIV", "KC", "HOU", Some(51), Some(31)),
        game(2020, 1, "REG", "HOU", "IND", Some(10), Some(20)),
    ];
    let rows = build_summary(&schedule, &pbp(vec![]), &WEEK_WINDOW).unwrap();
    let flags: Vec<(u16, &str, bool)> = rows.iter().map(|r| (r.year, r.team.as_str(), r.made_playoffs)).collect();
    assert_eq!(
        flags,
        vec![
            (2019, "HOU", true),
            (2019, "IND", false),
            (2020, "HOU", false),
            (2020, "IND", false),
        ]
    );
}
