// src/cli.rs
use std::path::PathBuf;

use crate::config::options::{RunOptions, Source};
use crate::error::{Error, Result};
use crate::progress::ConsoleProgress;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

/// Parse arguments (program name already stripped) and run.
pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    let opts = match parse_cli(args)? {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    crate::log::init(opts.verbose);

    let mut progress = ConsoleProgress::default();
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    if opts.preview_rows > 0 {
        print!("{}", crate::file::preview(&summary.rows, opts.preview_rows));
    }
    Ok(())
}

pub fn parse_cli<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut opts = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "--years" => opts.years = parse_years(&value("--years")?)?,
            "-o" | "--out" => opts.out = PathBuf::from(value("--out")?),
            "--data-dir" => opts.source = Source::Local(PathBuf::from(value("--data-dir")?)),
            "--preview" => {
                let v = value("--preview")?;
                opts.preview_rows = v
                    .parse()
                    .map_err(|_| Error::Usage(format!("Invalid row count: {v}")))?;
            }
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(Command::Run(opts))
}

/// "2018-2020,2023" → [2018, 2019, 2020, 2023]. Sorted, deduplicated, never empty.
pub fn parse_years(s: &str) -> Result<Vec<u16>> {
    let num = |p: &str| {
        p.trim()
            .parse::<u16>()
            .map_err(|_| Error::Usage(format!("Invalid season: {p}")))
    };

    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let (a, b) = (num(a)?, num(b)?);
            if a > b { return Err(Error::Usage(format!("Invalid range: {part}"))); }
            out.extend(a..=b);
        } else {
            out.push(num(part)?);
        }
    }
    out.sort_unstable();
    out.dedup();
    if out.is_empty() {
        return Err(Error::Usage(format!("No seasons in: {s:?}")));
    }
    Ok(out)
}
