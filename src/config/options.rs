// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where schedules and play-by-play come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// nflverse over HTTPS.
    Remote,
    /// A directory holding `games.csv` and one `play_by_play_<year>` file per season.
    Local(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub years: Vec<u16>,
    pub out: PathBuf,
    pub source: Source,
    pub preview_rows: usize,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            years: default_years(),
            out: PathBuf::from(OUT_CSV),
            source: Source::Remote,
            preview_rows: PREVIEW_ROWS,
            verbose: false,
        }
    }
}
