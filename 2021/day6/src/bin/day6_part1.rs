use anyhow::{Context, Result};
use clap::Parser;
use day6::{Part1CLIArgs, School};

fn main() -> Result<()> {
    day6::init_log();
    let args = Part1CLIArgs::parse();
    let ages = day6::read_ages(&args.input_path).with_context(|| {
        format!(
            "Failed to read ages from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut school = School::from_ages(&ages).context("Failed to build school from ages.")?;
    school
        .advance_days(args.days)
        .with_context(|| format!("Failed to simulate school for {} day(s).", args.days))?;
    println!(
        "After {} day(s), there are {} member(s) in the school.",
        args.days,
        school.total()
    );

    Ok(())
}
