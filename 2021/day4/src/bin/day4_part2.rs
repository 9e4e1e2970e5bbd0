use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    day4::init_log();
    let args = CLIArgs::parse();
    let bingo = day4::read_bingo(&args.input_path).with_context(|| {
        format!(
            "Failed to read bingo game from given file({}).",
            args.input_path.display()
        )
    })?;

    match bingo.last_winner() {
        Some(win) => println!(
            "The last winning board is #{}, it wins on number {} with unmarked sum {}, the final score is {}.",
            win.board_ind() + 1,
            win.number(),
            win.unmarked_sum(),
            win.score()
        ),
        None => println!(
            "Not every one of the {} board(s) wins with given numbers.",
            bingo.board_count()
        ),
    }

    Ok(())
}
