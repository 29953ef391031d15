//! Sonar Sweep: count how often the depth measurements increase.

use std::io::Write;
use std::path::Path;

use harness::{Context, ExerciseResult, Result, Runner, trace};

pub fn part1(depths: &[i64], ctx: &mut Context<'_>) -> ExerciseResult {
    let increases = count_increases(depths, 1);
    trace!(ctx, "{} of {} measurements increased", increases, depths.len());
    ExerciseResult::new("day1_part1", increases as i64)
}

/// Consecutive three-measurement windows share two measurements, so a
/// window sum grows exactly when the measurement entering it is larger
/// than the one leaving it.
pub fn part2(depths: &[i64], ctx: &mut Context<'_>) -> ExerciseResult {
    let increases = count_increases(depths, 3);
    trace!(ctx, "{} window sums increased", increases);
    ExerciseResult::new("day1_part2", increases as i64)
}

/// Count positions where a value exceeds the one `gap` places before it.
fn count_increases(depths: &[i64], gap: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(gap))
        .filter(|(before, after)| after > before)
        .count()
}

pub fn run<W: Write>(input: &Path, runner: &mut Runner<W>) -> Result<()> {
    let depths = harness::load::<i64>(input)?;
    runner.run(|ctx| part1(&depths, ctx))?;
    runner.run(|ctx| part2(&depths, ctx))?;
    Ok(())
}
