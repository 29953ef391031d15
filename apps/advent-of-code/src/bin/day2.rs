use std::path::Path;

use advent_of_code::{INPUT_FILE, fail, solutions::day2};
use harness::{AnswerStore, Mode, Runner};

/// Verify day 2 against the answers recorded next to `input.txt`.
fn main() {
    env_logger::init();

    let mut runner = Runner::new(Mode::Verify, AnswerStore::new(".")).timed(true);
    if let Err(err) = day2::run(Path::new(INPUT_FILE), &mut runner) {
        fail(err);
    }
}
