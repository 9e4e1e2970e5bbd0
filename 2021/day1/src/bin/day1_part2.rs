use anyhow::{Context, Result};
use clap::Parser;
use day1::Part2CLIArgs;

fn main() -> Result<()> {
    day1::init_log();
    let args = Part2CLIArgs::parse();
    let depths = day1::read_depths(&args.input_path).with_context(|| {
        format!(
            "Failed to read depth measurements from given file({}).",
            args.input_path.display()
        )
    })?;

    let inc_count = day1::count_window_increases(&depths, args.window);
    println!(
        "There are {} sum(s) of sliding window(size {}) larger than the previous one.",
        inc_count, args.window
    );

    Ok(())
}
