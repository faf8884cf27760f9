//! Null-safety demo harness.
//!
//! Two fixed scenarios are evaluated in order: an absent string and the
//! present string `"hello"`. Each produces one line made of its label and
//! either the value's character count or a fallback message.
//!
//! ```text
//! Test null string: String is null
//! Test non-null string: 5
//! ```

use std::fmt;
use std::io;

use crate::sink::OutputSink;

pub const NULL_LABEL: &str = "Test null string: ";
pub const NON_NULL_LABEL: &str = "Test non-null string: ";
pub const NON_NULL_VALUE: &str = "hello";
/// Printed in place of a length when the value is absent.
pub const ABSENT_MESSAGE: &str = "String is null";

/// One fixed input: a label and a value that is either absent or a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario<'a> {
    label: &'a str,
    value: Option<&'a str>,
}

impl<'a> Scenario<'a> {
    pub fn new(label: &'a str, value: Option<&'a str>) -> Self {
        Self { label, value }
    }

    /// The absent-value scenario.
    pub fn absent() -> Scenario<'static> {
        Scenario::new(NULL_LABEL, None)
    }

    /// The present-value scenario (`"hello"`).
    pub fn present() -> Scenario<'static> {
        Scenario::new(NON_NULL_LABEL, Some(NON_NULL_VALUE))
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn outcome(&self) -> Outcome {
        match self.value {
            Some(s) => Outcome::Length(s.chars().count()),
            None => Outcome::Absent,
        }
    }

    /// Label and outcome as one logical line.
    pub fn render(&self) -> String {
        format!("{}{}", self.label, self.outcome())
    }
}

/// Result of evaluating a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Character count of a present value.
    Length(usize),
    Absent,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Length(n) => write!(f, "{}", n),
            Outcome::Absent => f.write_str(ABSENT_MESSAGE),
        }
    }
}

/// Runs the fixed scenarios against an output sink.
#[derive(Debug)]
pub struct NullSafetyDemo<S> {
    sink: S,
}

impl<S: OutputSink> NullSafetyDemo<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Writes `Test null string: String is null`.
    pub fn run_null_check(&mut self) -> io::Result<()> {
        self.check(Scenario::absent())
    }

    /// Writes `Test non-null string: 5`.
    pub fn run_non_null_check(&mut self) -> io::Result<()> {
        self.check(Scenario::present())
    }

    /// Null check, then non-null check.
    pub fn run(&mut self) -> io::Result<()> {
        self.run_null_check()?;
        self.run_non_null_check()
    }

    pub fn check(&mut self, scenario: Scenario<'_>) -> io::Result<()> {
        let line = scenario.render();
        tracing::debug!(label = scenario.label().trim_end(), outcome = %scenario.outcome(), "scenario evaluated");
        self.sink.write_line(&line)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
