// src/bin/cli.rs
use nfl_weeks1_6::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(std::env::args().skip(1))?;
    Ok(())
}
