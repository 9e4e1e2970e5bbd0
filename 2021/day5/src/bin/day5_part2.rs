use anyhow::{Context, Result};
use clap::Parser;
use day5::{CLIArgs, OverlapGrid, SegmentKind};

fn main() -> Result<()> {
    day5::init_log();
    let args = CLIArgs::parse();
    let segments = day5::read_segments(&args.input_path).with_context(|| {
        format!(
            "Failed to read line segments from given file({}).",
            args.input_path.display()
        )
    })?;

    let grid = OverlapGrid::with_segments(&segments, |k| k != SegmentKind::Skewed)
        .context("Failed to build overlap grid from given segments.")?;
    println!(
        "At {} point(s) at least {} horizontal, vertical and diagonal lines overlap.",
        grid.count_at_least(args.threshold),
        args.threshold
    );

    Ok(())
}
