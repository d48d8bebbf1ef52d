// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};
use crate::model::{TeamSeasonSummary, SUMMARY_HEADERS};

/// Header row, then one row per summary, in the given order.
pub fn write_summary<W: Write>(w: W, rows: &[TeamSeasonSummary]) -> csv::Result<()> {
    let mut out = csv::WriterBuilder::new().has_headers(false).from_writer(w);
    out.write_record(SUMMARY_HEADERS)?;
    for row in rows {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Create/truncate `path` and write the summary table. Parent directories are created.
/// Returns the path written to.
pub fn write_summary_csv(path: &Path, rows: &[TeamSeasonSummary]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?; // truncate/overwrite
    write_summary(std::io::BufWriter::new(file), rows)
        .map_err(|e| Error::csv(path.display().to_string(), e))?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Usage(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Text table of the first `n` rows, columns right-aligned to their widest cell.
pub fn preview(rows: &[TeamSeasonSummary], n: usize) -> String {
    let body: Vec<[String; 9]> = rows.iter().take(n).map(TeamSeasonSummary::cells).collect();

    let mut widths = SUMMARY_HEADERS.map(str::len);
    for cells in &body {
        for (w, c) in widths.iter_mut().zip(cells) {
            *w = (*w).max(c.len());
        }
    }

    let mut out = s!();
    push_line(&mut out, SUMMARY_HEADERS.iter().copied(), &widths);
    for cells in &body {
        push_line(&mut out, cells.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells.zip(widths).map(|(c, &w)| format!("{c:>w$}")).collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}
