//! Harness for puzzle solutions: typed input loading, optional wall-clock
//! timing, and regression checks against recorded answers.

pub mod answer;
pub mod error;
pub mod input;
pub mod runner;
pub mod timing;

pub use answer::AnswerStore;
pub use error::{Error, Result};
pub use input::{InputSequence, load, load_lines, parse_lines, parse_tokens};
pub use runner::{Context, ExerciseResult, Mode, Runner};
pub use timing::{Stopwatch, Timing};

/// Write a diagnostic line through a [`Context`].
///
/// The line is dropped while the runner is timing the computation.
///
/// ```
/// use harness::{Context, trace};
///
/// let mut out = Vec::new();
/// let mut ctx = Context::new(&mut out, false);
/// trace!(ctx, "{} increases", 7);
/// assert_eq!(out, b"7 increases\n");
/// ```
#[macro_export]
macro_rules! trace {
    ($ctx:expr, $($arg:tt)*) => {
        $ctx.trace(::std::format_args!($($arg)*))
    };
}
