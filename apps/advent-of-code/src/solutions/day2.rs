//! Dive!: follow the submarine's planned course.

use std::io::Write;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use harness::{Context, ExerciseResult, Result, Runner, trace};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("expected `<direction> <amount>`")]
    Shape,
    #[error("unknown direction {0:?}")]
    Direction(String),
    #[error("invalid amount: {0}")]
    Amount(#[from] ParseIntError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(direction), Some(amount), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CommandError::Shape);
        };
        let amount = amount.parse()?;
        match direction {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => Err(CommandError::Direction(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CourseError {
    #[error("position overflowed at command {0}")]
    Overflow(usize),
    #[error("horizontal {horizontal} times depth {depth} overflows")]
    Product { horizontal: i64, depth: i64 },
}

fn step(value: Option<i64>, index: usize) -> std::result::Result<i64, CourseError> {
    value.ok_or(CourseError::Overflow(index + 1))
}

fn product(horizontal: i64, depth: i64) -> std::result::Result<i64, CourseError> {
    horizontal
        .checked_mul(depth)
        .ok_or(CourseError::Product { horizontal, depth })
}

pub fn part1(
    course: &[Command],
    ctx: &mut Context<'_>,
) -> std::result::Result<ExerciseResult, CourseError> {
    let (mut horizontal, mut depth) = (0i64, 0i64);
    for (i, command) in course.iter().enumerate() {
        match *command {
            Command::Forward(n) => horizontal = step(horizontal.checked_add(n), i)?,
            Command::Down(n) => depth = step(depth.checked_add(n), i)?,
            Command::Up(n) => depth = step(depth.checked_sub(n), i)?,
        }
    }
    trace!(ctx, "horizontal {}, depth {}", horizontal, depth);
    Ok(ExerciseResult::new("day2_part1", product(horizontal, depth)?))
}

/// Down and up steer the aim; only forward moves, diving by `aim * n`.
pub fn part2(
    course: &[Command],
    ctx: &mut Context<'_>,
) -> std::result::Result<ExerciseResult, CourseError> {
    let (mut horizontal, mut depth, mut aim) = (0i64, 0i64, 0i64);
    for (i, command) in course.iter().enumerate() {
        match *command {
            Command::Forward(n) => {
                horizontal = step(horizontal.checked_add(n), i)?;
                let dive = step(aim.checked_mul(n), i)?;
                depth = step(depth.checked_add(dive), i)?;
            }
            Command::Down(n) => aim = step(aim.checked_add(n), i)?,
            Command::Up(n) => aim = step(aim.checked_sub(n), i)?,
        }
    }
    trace!(ctx, "horizontal {}, depth {}, aim {}", horizontal, depth, aim);
    Ok(ExerciseResult::new("day2_part2", product(horizontal, depth)?))
}

pub fn run<W: Write>(input: &Path, runner: &mut Runner<W>) -> Result<()> {
    let course = harness::load_lines::<Command>(input)?;
    runner.try_run(|ctx| part1(&course, ctx))?;
    runner.try_run(|ctx| part2(&course, ctx))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const EXAMPLE: &[Command] = &[
        Command::Forward(5),
        Command::Down(5),
        Command::Forward(8),
        Command::Up(3),
        Command::Down(8),
        Command::Forward(2),
    ];

    fn quiet<F>(f: F) -> std::result::Result<ExerciseResult, CourseError>
    where
        F: FnOnce(&mut Context<'_>) -> std::result::Result<ExerciseResult, CourseError>,
    {
        let mut sink = io::sink();
        f(&mut Context::new(&mut sink, true))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("forward 5".parse::<Command>().unwrap(), Command::Forward(5));
        assert_eq!("down 12".parse::<Command>().unwrap(), Command::Down(12));
        assert_eq!("up 3".parse::<Command>().unwrap(), Command::Up(3));
    }

    #[test]
    fn test_parse_rejects_bad_commands() {
        assert!(matches!(
            "sideways 2".parse::<Command>(),
            Err(CommandError::Direction(_))
        ));
        assert!(matches!(
            "forward x".parse::<Command>(),
            Err(CommandError::Amount(_))
        ));
        assert!(matches!("forward".parse::<Command>(), Err(CommandError::Shape)));
        assert!(matches!(
            "forward 1 2".parse::<Command>(),
            Err(CommandError::Shape)
        ));
    }

    #[test]
    fn test_parse_course() {
        let course = harness::parse_lines::<Command>(
            "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n",
        )
        .unwrap();
        assert_eq!(&course[..], EXAMPLE);
    }

    #[test]
    fn test_course_with_bad_line() {
        let err = harness::parse_lines::<Command>("forward 5\nbackward 2\n").unwrap_err();
        assert!(matches!(err, harness::Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_part1_example() {
        let result = quiet(|ctx| part1(EXAMPLE, ctx)).unwrap();
        assert_eq!(result, ExerciseResult::new("day2_part1", 150));
    }

    #[test]
    fn test_part2_example() {
        let result = quiet(|ctx| part2(EXAMPLE, ctx)).unwrap();
        assert_eq!(result, ExerciseResult::new("day2_part2", 900));
    }

    #[test]
    fn test_multi_digit_amounts() {
        let course = [Command::Forward(10), Command::Down(25), Command::Forward(3)];
        assert_eq!(quiet(|ctx| part1(&course, ctx)).unwrap().answer, 13 * 25);
        assert_eq!(quiet(|ctx| part2(&course, ctx)).unwrap().answer, 13 * 75);
    }

    #[test]
    fn test_large_amounts_report_overflow() {
        let course =
            harness::parse_lines::<Command>("forward 4294967296\ndown 4294967296\n").unwrap();
        assert_eq!(
            quiet(|ctx| part1(&course, ctx)),
            Err(CourseError::Product {
                horizontal: 4294967296,
                depth: 4294967296,
            })
        );
    }

    #[test]
    fn test_running_sums_report_overflow() {
        let course = [Command::Forward(i64::MAX), Command::Forward(1)];
        assert_eq!(quiet(|ctx| part1(&course, ctx)), Err(CourseError::Overflow(2)));

        let course = [Command::Down(i64::MAX), Command::Forward(2)];
        assert_eq!(quiet(|ctx| part2(&course, ctx)), Err(CourseError::Overflow(2)));

        let course = [Command::Up(i64::MAX), Command::Up(2)];
        assert_eq!(quiet(|ctx| part1(&course, ctx)), Err(CourseError::Overflow(2)));
    }
}
