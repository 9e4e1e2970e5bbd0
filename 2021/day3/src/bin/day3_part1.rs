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
        "Gamma rate is {}, epsilon rate is {}, the power consumption is {}.",
        report.gamma_rate(),
        report.epsilon_rate(),
        report.power_consumption()
    );

    Ok(())
}
