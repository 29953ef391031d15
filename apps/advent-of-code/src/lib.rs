use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use harness::{Error, Result, Runner};

pub mod solutions;

/// Available puzzle days
pub const DAYS: &[u32] = &[1, 2];

/// Conventional input file inside a day's directory
pub const INPUT_FILE: &str = "input.txt";

/// Load the input for `day` and run both of its parts through `runner`.
/// Returns `None` if the day is not implemented.
pub fn run_day<W: Write>(day: u32, input: &Path, runner: &mut Runner<W>) -> Option<Result<()>> {
    match day {
        1 => Some(solutions::day1::run(input, runner)),
        2 => Some(solutions::day2::run(input, runner)),
        _ => None,
    }
}

/// Directory holding `day`'s input and recorded answers under `root`.
pub fn day_dir(root: &Path, day: u32) -> PathBuf {
    root.join(day.to_string())
}

/// Report a failed run and end the process.
///
/// A missing or disagreeing baseline aborts, like a failed assertion would;
/// anything else (unreadable input, failed writes) exits with status 1.
pub fn fail(err: Error) -> ! {
    eprintln!("{}", err);
    if err.is_baseline_failure() {
        process::abort();
    }
    process::exit(1);
}
