// src/provider/decode.rs
//
// Bytes → rows. CSV through the csv crate, parquet through polars.

use std::collections::BTreeSet;
use std::io::{Cursor, Read};

use polars::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Play, PlayByPlay, ScheduleRow};

/// Schedule rows of `years` from an nflverse `games.csv` stream.
/// Other seasons are skipped without being validated.
pub fn schedules_from_csv<R: Read>(rdr: R, years: &[u16], what: &str) -> Result<Vec<ScheduleRow>> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers().map_err(|e| Error::csv(what, e))?.clone();
    let season_ix = headers
        .iter()
        .position(|h| h == "season")
        .ok_or_else(|| Error::Malformed(format!("{what}: no `season` column")))?;

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::csv(what, e))?;
        let in_range = record
            .get(season_ix)
            .and_then(|s| s.trim().parse::<u16>().ok())
            .is_some_and(|s| years.contains(&s));
        if !in_range {
            continue;
        }
        let row: ScheduleRow = record
            .deserialize(Some(&headers))
            .map_err(|e| Error::csv(what, e))?;
        out.push(row);
    }
    Ok(out)
}

/// Play-by-play from a CSV stream with a header row. Empty and `NA` cells are null.
pub fn plays_from_csv<R: Read>(rdr: R, what: &str) -> Result<PlayByPlay> {
    let mut reader = csv::Reader::from_reader(rdr);
    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv(what, e))?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut plays = Vec::new();
    for play in reader.deserialize::<Play>() {
        plays.push(play.map_err(|e| Error::csv(what, e))?.normalize_nulls());
    }
    Ok(PlayByPlay::new(columns, plays))
}

/// Columns a [`Play`] is built from. Everything else in the file stays on disk.
pub const PLAY_COLUMNS: [&str; 10] = [
    "season",
    "week",
    "game_id",
    "season_type",
    "posteam",
    "interception",
    "fumble_lost",
    "rush",
    "pass",
    "yards_gained",
];

/// Play-by-play from an in-memory parquet file. Only [`PLAY_COLUMNS`] are decoded;
/// the reported column set is the file's full schema.
pub fn plays_from_parquet(bytes: Vec<u8>, what: &str) -> Result<PlayByPlay> {
    let fail = |source: PolarsError| Error::Parquet { what: s!(what), source };

    let mut reader = ParquetReader::new(Cursor::new(bytes));
    let columns: BTreeSet<String> = reader
        .schema()
        .map_err(fail)?
        .fields
        .iter()
        .map(|f| f.name.to_string())
        .collect();
    let wanted: Vec<String> = PLAY_COLUMNS
        .iter()
        .filter(|c| columns.contains(**c))
        .map(|c| s!(*c))
        .collect();
    if wanted.is_empty() {
        // Nothing a play is built from; the column check downstream reports it.
        return Ok(PlayByPlay { columns, plays: Vec::new() });
    }
    let df = reader.with_columns(Some(wanted)).finish().map_err(fail)?;

    let season = int_column(&df, &columns, "season").map_err(fail)?;
    let week = int_column(&df, &columns, "week").map_err(fail)?;
    let game_id = str_column(&df, &columns, "game_id").map_err(fail)?;
    let season_type = str_column(&df, &columns, "season_type").map_err(fail)?;
    let posteam = str_column(&df, &columns, "posteam").map_err(fail)?;
    let interception = float_column(&df, &columns, "interception").map_err(fail)?;
    let fumble_lost = float_column(&df, &columns, "fumble_lost").map_err(fail)?;
    let rush = float_column(&df, &columns, "rush").map_err(fail)?;
    let pass = float_column(&df, &columns, "pass").map_err(fail)?;
    let yards_gained = float_column(&df, &columns, "yards_gained").map_err(fail)?;

    let plays = (0..df.height())
        .map(|i| {
            Play {
                season: at(&season, i).and_then(|v| u16::try_from(v).ok()),
                week: at(&week, i).and_then(|v| u8::try_from(v).ok()),
                game_id: at_str(&game_id, i),
                season_type: at_str(&season_type, i),
                posteam: at_str(&posteam, i),
                interception: at(&interception, i),
                fumble_lost: at(&fumble_lost, i),
                rush: at(&rush, i),
                pass: at(&pass, i),
                yards_gained: at(&yards_gained, i),
            }
            .normalize_nulls()
        })
        .collect();

    Ok(PlayByPlay { columns, plays })
}

/* ---------------- column helpers ---------------- */

// `cols` is the file schema. An absent column comes back empty; every lookup
// into it is then null.

fn int_column(df: &DataFrame, cols: &BTreeSet<String>, name: &str) -> PolarsResult<Vec<Option<i64>>> {
    if !cols.contains(name) {
        return Ok(Vec::new());
    }
    let s = df.column(name)?.cast(&DataType::Int64)?;
    Ok(s.i64()?.into_iter().collect())
}

fn float_column(df: &DataFrame, cols: &BTreeSet<String>, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    if !cols.contains(name) {
        return Ok(Vec::new());
    }
    let s = df.column(name)?.cast(&DataType::Float64)?;
    Ok(s.f64()?.into_iter().collect())
}

fn str_column(df: &DataFrame, cols: &BTreeSet<String>, name: &str) -> PolarsResult<Vec<Option<String>>> {
    if !cols.contains(name) {
        return Ok(Vec::new());
    }
    let s = df.column(name)?.cast(&DataType::String)?;
    Ok(s.str()?.into_iter().map(|v| v.map(str::to_owned)).collect())
}

fn at<T: Copy>(col: &[Option<T>], i: usize) -> Option<T> {
    col.get(i).copied().flatten()
}

fn at_str(col: &[Option<String>], i: usize) -> Option<String> {
    col.get(i).cloned().flatten()
}
