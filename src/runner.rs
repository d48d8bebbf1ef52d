// src/runner.rs
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::{
    config::consts::WEEK_WINDOW,
    config::options::RunOptions,
    error::Result,
    file,
    model::{PlayByPlay, TeamSeasonSummary},
    pipeline,
    progress::Progress,
    provider::{self, StatsProvider},
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out: PathBuf,
    pub rows: Vec<TeamSeasonSummary>,
}

/// Top-level runner against the provider named by `opts.source`.
/// `progress` can be None (no output) or Some(&mut impl Progress).
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let provider = provider::for_source(&opts.source);
    run_with(provider.as_ref(), opts, progress)
}

/// Load, aggregate, write. Nothing touches disk until every stage has succeeded.
pub fn run_with(
    provider: &dyn StatsProvider,
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let started = Instant::now();

    say(&mut progress, "Loading schedules...");
    let schedules = provider.schedules(&opts.years)?;
    info!(source = %provider.name(), games = schedules.len(), "schedules loaded");

    say(&mut progress, "Loading play-by-play (this can take a while)...");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.years.len());
    }
    let mut pbp = PlayByPlay::default();
    for &year in &opts.years {
        let one = provider.play_by_play_season(year)?;
        debug!(season = year, plays = one.plays.len(), "play-by-play loaded");
        if let Some(p) = progress.as_deref_mut() {
            p.season_done(year, one.plays.len());
        }
        pbp.append(one);
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let rows = pipeline::build_summary(&schedules, &pbp, &WEEK_WINDOW)?;
    info!(plays = pbp.plays.len(), rows = rows.len(), "season summary built");
    drop(pbp);

    say(&mut progress, &format!("Writing CSV to {} ...", opts.out.display()));
    let out = file::write_summary_csv(&opts.out, &rows)?;
    say(&mut progress, "Done!");
    info!(rows = rows.len(), elapsed_ms = started.elapsed().as_millis() as u64, "summary written");

    Ok(RunSummary { out, rows })
}

fn say(progress: &mut Option<&mut dyn Progress>, msg: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
    }
}
