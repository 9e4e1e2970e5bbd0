use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    day1::init_log();
    let args = CLIArgs::parse();
    let depths = day1::read_depths(&args.input_path).with_context(|| {
        format!(
            "Failed to read depth measurements from given file({}).",
            args.input_path.display()
        )
    })?;

    let inc_count = day1::count_increases(&depths);
    println!(
        "There are {} measurement(s) larger than the previous one.",
        inc_count
    );

    Ok(())
}
