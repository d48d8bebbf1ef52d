// src/provider/mod.rs
//! # Statistics providers
//!
//! The pipeline never talks to the network or the filesystem directly. It asks a
//! [`StatsProvider`] for two things:
//!
//! - **schedules**: one [`ScheduleRow`] per game for the requested seasons, regular
//!   season and postseason alike;
//! - **play-by-play**: one [`PlayByPlay`] per season, carrying the source's column
//!   set so the aggregators can validate it.
//!
//! ## Implementations
//! - [`nflverse::Nflverse`] – the public nflverse releases over HTTPS (`games.csv`
//!   plus one parquet file per season).
//! - [`local::LocalDir`] – the same files saved into a directory, for offline and
//!   repeatable runs. Play-by-play may be parquet or CSV.
//!
//! Decoding is shared in [`decode`]; providers only decide where the bytes come from.
//! Neither caches nor retries; any failure ends the run.

pub mod decode;
pub mod local;
pub mod nflverse;

use crate::config::options::Source;
use crate::error::Result;
use crate::model::{PlayByPlay, ScheduleRow};

pub trait StatsProvider {
    /// Short label for progress and log lines.
    fn name(&self) -> String;

    /// All games (any game type) of the given seasons.
    fn schedules(&self, years: &[u16]) -> Result<Vec<ScheduleRow>>;

    /// Every play of one season.
    fn play_by_play_season(&self, year: u16) -> Result<PlayByPlay>;

    /// Every play of the given seasons, columns unioned across seasons.
    fn play_by_play(&self, years: &[u16]) -> Result<PlayByPlay> {
        let mut all = PlayByPlay::default();
        for &year in years {
            all.append(self.play_by_play_season(year)?);
        }
        Ok(all)
    }
}

pub fn for_source(source: &Source) -> Box<dyn StatsProvider> {
    match source {
        Source::Remote => Box::new(nflverse::Nflverse),
        Source::Local(dir) => Box::new(local::LocalDir::new(dir.clone())),
    }
}
