//! Typed loading of puzzle input files.
//!
//! Every token must parse into the target type; the first one that doesn't
//! fails the whole load, so callers never see a truncated sequence.

use std::fmt::Display;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Name used in parse errors for text that did not come from a file.
const IN_MEMORY: &str = "<memory>";

/// Ordered tokens parsed from one input, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSequence<T>(Vec<T>);

impl<T> InputSequence<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for InputSequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

/// Load a file as whitespace-separated tokens of type `T`.
///
/// # Example
///
/// ```no_run
/// let depths = harness::load::<i64>("input.txt")?;
/// println!("{} measurements", depths.len());
/// # Ok::<(), harness::Error>(())
/// ```
pub fn load<T>(path: impl AsRef<Path>) -> Result<InputSequence<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let path = path.as_ref();
    let text = read(path)?;
    let tokens = parse_all(words(&text), path)?;
    log::debug!("loaded {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}

/// Load a file with one `T` per non-empty line.
pub fn load_lines<T>(path: impl AsRef<Path>) -> Result<InputSequence<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let path = path.as_ref();
    let text = read(path)?;
    let lines = parse_all(lines(&text), path)?;
    log::debug!("loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Whitespace tokenization of in-memory text, as [`load`] does for files.
pub fn parse_tokens<T>(text: &str) -> Result<InputSequence<T>>
where
    T: FromStr,
    T::Err: Display,
{
    parse_all(words(text), Path::new(IN_MEMORY))
}

/// Line tokenization of in-memory text, as [`load_lines`] does for files.
pub fn parse_lines<T>(text: &str) -> Result<InputSequence<T>>
where
    T: FromStr,
    T::Err: Display,
{
    parse_all(lines(text), Path::new(IN_MEMORY))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::io(path, source))
}

/// Tokens paired with their 1-based line number.
fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |word| (i + 1, word)))
}

fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_all<'a, T, I>(tokens: I, path: &Path) -> Result<InputSequence<T>>
where
    I: Iterator<Item = (usize, &'a str)>,
    T: FromStr,
    T::Err: Display,
{
    tokens
        .map(|(line, token)| {
            token.parse::<T>().map_err(|err| Error::Parse {
                path: path.to_path_buf(),
                line,
                token: token.to_string(),
                reason: err.to_string(),
            })
        })
        .collect::<Result<Vec<T>>>()
        .map(InputSequence)
}
