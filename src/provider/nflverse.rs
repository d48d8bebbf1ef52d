// src/provider/nflverse.rs
use crate::config::consts::{PBP_URL_PREFIX, SCHEDULES_URL};
use crate::net::http_get_bytes;
use crate::error::Result;
use crate::model::{PlayByPlay, ScheduleRow};

use super::{decode, StatsProvider};

/// Public nflverse data releases.
pub struct Nflverse;

pub fn pbp_url(year: u16) -> String {
    join!(PBP_URL_PREFIX, year, ".parquet")
}

impl StatsProvider for Nflverse {
    fn name(&self) -> String {
        s!("nflverse")
    }

    fn schedules(&self, years: &[u16]) -> Result<Vec<ScheduleRow>> {
        let body = http_get_bytes(SCHEDULES_URL)?;
        decode::schedules_from_csv(body.as_slice(), years, SCHEDULES_URL)
    }

    fn play_by_play_season(&self, year: u16) -> Result<PlayByPlay> {
        let url = pbp_url(year);
        let body = http_get_bytes(&url)?;
        decode::plays_from_parquet(body, &url)
    }
}
