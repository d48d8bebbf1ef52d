// src/provider/local.rs
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::consts::{PBP_FILE_STEM, SCHEDULES_FILE};
use crate::error::{Error, Result};
use crate::model::{PlayByPlay, ScheduleRow};

use super::{decode, StatsProvider};

/// A directory snapshot of the provider's files:
///
/// ```text
/// <dir>/games.csv
/// <dir>/play_by_play_<year>.parquet   (preferred)
/// <dir>/play_by_play_<year>.csv
/// ```
pub struct LocalDir {
    dir: PathBuf,
}

impl LocalDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn pbp_path(&self, year: u16, ext: &str) -> PathBuf {
        self.dir.join(format!("{PBP_FILE_STEM}{year}.{ext}"))
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| Error::io(path, e))
}

impl StatsProvider for LocalDir {
    fn name(&self) -> String {
        self.dir.display().to_string()
    }

    fn schedules(&self, years: &[u16]) -> Result<Vec<ScheduleRow>> {
        let path = self.dir.join(SCHEDULES_FILE);
        let what = path.display().to_string();
        decode::schedules_from_csv(open(&path)?, years, &what)
    }

    fn play_by_play_season(&self, year: u16) -> Result<PlayByPlay> {
        let parquet = self.pbp_path(year, "parquet");
        if parquet.is_file() {
            let bytes = fs::read(&parquet).map_err(|e| Error::io(&parquet, e))?;
            return decode::plays_from_parquet(bytes, &parquet.display().to_string());
        }
        let csv_path = self.pbp_path(year, "csv");
        let what = csv_path.display().to_string();
        decode::plays_from_csv(open(&csv_path)?, &what)
    }
}
