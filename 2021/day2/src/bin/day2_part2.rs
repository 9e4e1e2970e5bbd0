use anyhow::{Context, Result};
use clap::Parser;
use day2::{AimPilot, CLIArgs, Pilot};

fn main() -> Result<()> {
    day2::init_log();
    let args = CLIArgs::parse();
    let commands = day2::read_commands(&args.input_path).with_context(|| {
        format!(
            "Failed to read commands from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut pilot = AimPilot::default();
    let pos = pilot.steer(&commands);
    println!(
        "The final position with aim is (horizontal {}, depth {}), the product of them is {}.",
        pos.horizontal(),
        pos.depth(),
        pos.product()
    );

    Ok(())
}
