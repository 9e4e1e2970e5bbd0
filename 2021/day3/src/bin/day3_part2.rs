use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    day3::init_log();
    let args = CLIArgs::parse();
    let report = day3::read_report(&args.input_path).with_context(|| {
        format!(
            "Failed to read diagnostic report from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "Oxygen generator rating is {}, CO2 scrubber rating is {}, the life support rating is {}.",
        report.oxygen_generator_rating(),
        report.co2_scrubber_rating(),
        report.life_support_rating()
    );

    Ok(())
}
