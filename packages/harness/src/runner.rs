//! Runs labeled computations in verify or record mode.

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};

use crate::answer::AnswerStore;
use crate::error::{Error, Result};
use crate::timing::{Stopwatch, Timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compare each answer with the recorded one.
    Verify,
    /// Print each answer and record it as the new baseline.
    Record,
}

/// Answer of one computation, keyed by the label its baseline is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseResult {
    pub label: String,
    pub answer: i64,
}

impl ExerciseResult {
    pub fn new(label: impl Into<String>, answer: i64) -> Self {
        ExerciseResult {
            label: label.into(),
            answer,
        }
    }
}

/// Handle passed to a computation for diagnostic output.
pub struct Context<'a> {
    out: &'a mut dyn Write,
    quiet: bool,
}

impl<'a> Context<'a> {
    /// A quiet context drops every [`trace`](Context::trace) call.
    pub fn new(out: &'a mut dyn Write, quiet: bool) -> Self {
        Context { out, quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Write one diagnostic line, unless timing is active.
    pub fn trace(&mut self, args: fmt::Arguments<'_>) {
        if self.quiet {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", args) {
            log::warn!("dropped diagnostic output: {}", err);
        }
    }
}

/// Executes computations one at a time against an [`AnswerStore`].
///
/// The runner reports failures as [`Error`]s and leaves it to the caller to
/// decide whether the process should stop.
pub struct Runner<W = io::Stdout> {
    mode: Mode,
    timed: bool,
    answers: AnswerStore,
    stopwatch: Stopwatch,
    out: W,
}

impl Runner<io::Stdout> {
    pub fn new(mode: Mode, answers: AnswerStore) -> Self {
        Runner::with_output(mode, answers, io::stdout())
    }
}

impl<W: Write> Runner<W> {
    pub fn with_output(mode: Mode, answers: AnswerStore, out: W) -> Self {
        Runner {
            mode,
            timed: false,
            answers,
            stopwatch: Stopwatch::new(),
            out,
        }
    }

    /// Measure wall-clock time of each computation in verify mode.
    pub fn timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Invoke `computation` once and check or record its answer.
    ///
    /// # Example
    ///
    /// ```
    /// use harness::{AnswerStore, ExerciseResult, Mode, Runner};
    /// use tempfile::TempDir;
    ///
    /// let dir = TempDir::new().unwrap();
    /// let answers = AnswerStore::new(dir.path());
    ///
    /// let mut record = Runner::with_output(Mode::Record, answers.clone(), Vec::new());
    /// record.run(|_| ExerciseResult::new("X", 42))?;
    /// assert_eq!(record.into_output(), b"X: 42\n");
    ///
    /// let mut verify = Runner::with_output(Mode::Verify, answers, Vec::new());
    /// verify.run(|_| ExerciseResult::new("X", 42))?;
    /// # Ok::<(), harness::Error>(())
    /// ```
    pub fn run<F>(&mut self, computation: F) -> Result<ExerciseResult>
    where
        F: FnOnce(&mut Context<'_>) -> ExerciseResult,
    {
        self.try_run(|ctx| Ok::<_, Infallible>(computation(ctx)))
    }

    /// Like [`run`](Runner::run), for computations that can fail.
    ///
    /// A failed computation is reported as [`Error::Computation`]; nothing is
    /// compared or recorded.
    pub fn try_run<F, E>(&mut self, computation: F) -> Result<ExerciseResult>
    where
        F: FnOnce(&mut Context<'_>) -> std::result::Result<ExerciseResult, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        match self.mode {
            Mode::Verify => self.verify(computation),
            Mode::Record => self.record(computation),
        }
    }

    fn verify<F, E>(&mut self, computation: F) -> Result<ExerciseResult>
    where
        F: FnOnce(&mut Context<'_>) -> std::result::Result<ExerciseResult, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        if self.timed {
            self.stopwatch.start();
        }
        let outcome = {
            let quiet = self.stopwatch.is_timing();
            let mut ctx = Context::new(&mut self.out, quiet);
            computation(&mut ctx)
        };
        let elapsed = self.stopwatch.stop();
        let result = outcome.map_err(|err| Error::Computation(Box::new(err)))?;
        if let Some(elapsed) = elapsed {
            let timing = Timing {
                label: result.label.clone(),
                elapsed,
            };
            self.emit(format_args!("{}", timing))?;
        }

        let expected = self.answers.read(&result.label)?;
        if expected != result.answer {
            return Err(Error::AnswerMismatch {
                label: result.label,
                expected,
                actual: result.answer,
            });
        }
        log::info!("{} matches recorded answer {}", result.label, expected);
        Ok(result)
    }

    fn record<F, E>(&mut self, computation: F) -> Result<ExerciseResult>
    where
        F: FnOnce(&mut Context<'_>) -> std::result::Result<ExerciseResult, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let result = {
            let mut ctx = Context::new(&mut self.out, false);
            computation(&mut ctx)
        }
        .map_err(|err| Error::Computation(Box::new(err)))?;
        self.emit(format_args!("{}: {}", result.label, result.answer))?;
        self.answers.write(&result.label, result.answer)?;
        Ok(result)
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.out, "{}", args).map_err(Error::Output)
    }
}
