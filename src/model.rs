// src/model.rs
//
// Row shapes flowing through the pipeline.
//
// - ScheduleRow:       one game, as published by the provider.
// - TeamGame:          one team's side of one regular-season game.
// - Play / PlayByPlay: play records plus the column set they were read from.
// - TeamSeasonSummary: one output row.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::config::consts::REGULAR_SEASON;
use crate::divisions::Division;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScheduleRow {
    pub season: u16,
    pub week: u8,
    pub game_id: String,
    pub game_type: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub home_score: Option<u16>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub away_score: Option<u16>,
}

impl ScheduleRow {
    pub fn is_regular(&self) -> bool {
        self.game_type == REGULAR_SEASON
    }
}

/// Identifies one team's side of one game. Ordered for deterministic output.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamGameKey {
    pub season: u16,
    pub week: u8,
    pub game_id: String,
    pub team: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamGame {
    pub season: u16,
    pub week: u8,
    pub game_id: String,
    pub team: String,
    pub opp: String,
    pub points_for: Option<u16>,
    pub points_against: Option<u16>,
    pub is_win: bool,
    pub team_division: Option<Division>,
    pub opp_division: Option<Division>,
}

impl TeamGame {
    pub fn key(&self) -> TeamGameKey {
        TeamGameKey {
            season: self.season,
            week: self.week,
            game_id: self.game_id.clone(),
            team: self.team.clone(),
        }
    }

    /// Both sides known and equal. An unmapped team is never in a division game.
    pub fn is_division_game(&self) -> bool {
        matches!((self.team_division, self.opp_division), (Some(a), Some(b)) if a == b)
    }

    pub fn is_division_win(&self) -> bool {
        self.is_win && self.is_division_game()
    }

    /// Zero when either score is missing (unplayed game).
    pub fn point_diff(&self) -> i32 {
        match (self.points_for, self.points_against) {
            (Some(pf), Some(pa)) => i32::from(pf) - i32::from(pa),
            _ => 0,
        }
    }
}

/// One play. Every field is optional: upstream nulls stay nulls until an aggregator
/// decides what they mean.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Play {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub season: Option<u16>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub week: Option<u8>,
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub posteam: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub interception: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub fumble_lost: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rush: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub pass: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub yards_gained: Option<f64>,
}

impl Play {
    pub fn is_regular(&self) -> bool {
        self.season_type.as_deref() == Some(REGULAR_SEASON)
    }

    /// Key of the possessing team's side of the game; None for plays nobody possessed.
    pub fn posteam_key(&self) -> Option<TeamGameKey> {
        Some(TeamGameKey {
            season: self.season?,
            week: self.week?,
            game_id: self.game_id.clone()?,
            team: self.posteam.clone()?,
        })
    }

    /// Text sources spell null as an empty cell or `NA`.
    pub fn normalize_nulls(mut self) -> Self {
        for field in [
            &mut self.game_id,
            &mut self.season_type,
            &mut self.posteam,
        ] {
            if field.as_deref().is_some_and(|v| v.is_empty() || v == "NA") {
                *field = None;
            }
        }
        self
    }
}

/// Null counts as 0; otherwise truncated like an integer cast.
pub fn flag(v: Option<f64>) -> i64 {
    v.map_or(0, |x| x as i64)
}

/// Play-by-play for one or more seasons, with the union of the source columns.
#[derive(Clone, Debug, Default)]
pub struct PlayByPlay {
    pub columns: BTreeSet<String>,
    pub plays: Vec<Play>,
}

impl PlayByPlay {
    pub fn new<I, S>(columns: I, plays: Vec<Play>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { columns: columns.into_iter().map(Into::into).collect(), plays }
    }

    pub fn append(&mut self, other: PlayByPlay) {
        self.columns.extend(other.columns);
        self.plays.extend(other.plays);
    }

    /// Fail unless every `needed` column was present in the source.
    pub fn require(&self, needed: &[&str], purpose: &'static str) -> Result<()> {
        let mut missing: Vec<String> = needed
            .iter()
            .filter(|c| !self.columns.contains(**c))
            .map(|c| c.to_string())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort_unstable();
        Err(Error::MissingColumns { purpose, missing })
    }
}

/// One output row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamSeasonSummary {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Wins_Through_Week6")]
    pub wins: u32,
    #[serde(rename = "Losses_Through_Week6")]
    pub losses: u32,
    #[serde(rename = "Point_Differential_Wk1_6")]
    pub point_differential: i32,
    #[serde(rename = "Total_Turnovers_Wk1_6")]
    pub turnovers: i64,
    #[serde(rename = "Division_Wins_Wk1_6")]
    pub division_wins: u32,
    #[serde(rename = "Total_Offensive_Yards_Wk1_6")]
    pub offensive_yards: i64,
    #[serde(rename = "made_playoffs", serialize_with = "yes_no")]
    pub made_playoffs: bool,
}

pub const SUMMARY_HEADERS: [&str; 9] = [
    "Year",
    "Team",
    "Wins_Through_Week6",
    "Losses_Through_Week6",
    "Point_Differential_Wk1_6",
    "Total_Turnovers_Wk1_6",
    "Division_Wins_Wk1_6",
    "Total_Offensive_Yards_Wk1_6",
    "made_playoffs",
];

impl TeamSeasonSummary {
    /// Cells in header order, as written to the CSV.
    pub fn cells(&self) -> [String; 9] {
        [
            self.year.to_string(),
            self.team.clone(),
            self.wins.to_string(),
            self.losses.to_string(),
            self.point_differential.to_string(),
            self.turnovers.to_string(),
            self.division_wins.to_string(),
            self.offensive_yards.to_string(),
            s!(yes_no_str(self.made_playoffs)),
        ]
    }
}

fn yes_no_str(b: bool) -> &'static str {
    if b { "Y" } else { "N" }
}

fn yes_no<S: Serializer>(b: &bool, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(yes_no_str(*b))
}
