// src/progress.rs
/// Progress reporting for a run. The CLI prints; tests usually pass nothing.
pub trait Progress {
    /// Called before the per-season play-by-play loads, with the season count.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One season of play-by-play is in memory.
    fn season_done(&mut self, _season: u16, _plays: usize) {}

    /// Called once every season has loaded.
    fn finish(&mut self) {}
}

/// Plain stdout lines.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn season_done(&mut self, season: u16, plays: usize) {
        self.done += 1;
        println!("  [{}/{}] {season}: {plays} plays", self.done, self.total);
    }
}
