// src/config/consts.rs
use std::ops::RangeInclusive;

// Seasons pulled on a plain run (11 seasons)
pub const FIRST_SEASON: u16 = 2015;
pub const LAST_SEASON: u16 = 2025;

// Summary window: weeks 1 through 6 of the regular season
pub const WEEK_WINDOW: RangeInclusive<u8> = 1..=6;

// Game/season type code for the regular season, in both schedules and play-by-play
pub const REGULAR_SEASON: &str = "REG";

// Export
pub const OUT_CSV: &str = "nfl_weeks1_6_2018_2024_with_divisions_offyards.csv";
pub const PREVIEW_ROWS: usize = 20;

// Net config
pub const SCHEDULES_URL: &str =
    "https://raw.githubusercontent.com/nflverse/nfldata/master/data/games.csv";
pub const PBP_URL_PREFIX: &str =
    "https://github.com/nflverse/nflverse-data/releases/download/pbp/play_by_play_";
pub const USER_AGENT: &str = concat!("nfl_weeks1_6/", env!("CARGO_PKG_VERSION"));

// Local snapshot layout
pub const SCHEDULES_FILE: &str = "games.csv";
pub const PBP_FILE_STEM: &str = "play_by_play_";

pub fn default_years() -> Vec<u16> {
    (FIRST_SEASON..=LAST_SEASON).collect()
}
