//! Step-by-step narration of a conversion
//!
//! A [`ConversionTrace`] is filled by the same code path that computes the
//! result. Algorithms are written against the [`StepSink`] trait; the plain
//! operations pass [`NoTrace`], the `*_traced` operations pass a
//! `ConversionTrace`. Both run identical arithmetic, so the narration cannot
//! drift from the value.

use std::fmt;

use serde::Serialize;

/// One digit produced or consumed by an algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DigitStep {
    /// Integer to numeral: `working mod base` gives the next digit.
    Division {
        working: u128,
        base: u32,
        remainder: u32,
        digit: char,
    },
    /// Numeral to integer: `total = previous * base + digit_value`.
    Accumulate {
        position: usize,
        digit: char,
        digit_value: u32,
        total: u64,
    },
    /// Fraction extraction: `fraction * base`, integer part is the digit.
    Fraction {
        fraction: f64,
        base: u32,
        product: f64,
        digit: char,
    },
}

impl DigitStep {
    /// The digit this step produced or consumed.
    pub fn digit(&self) -> char {
        match self {
            DigitStep::Division { digit, .. }
            | DigitStep::Accumulate { digit, .. }
            | DigitStep::Fraction { digit, .. } => *digit,
        }
    }
}

impl fmt::Display for DigitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitStep::Division {
                working,
                base,
                remainder,
                digit,
            } => write!(
                f,
                "{} ÷ {} = {} remainder {} → {}",
                working,
                base,
                working / u128::from(*base),
                remainder,
                digit
            ),
            DigitStep::Accumulate {
                position,
                digit,
                digit_value,
                total,
            } => write!(
                f,
                "position {}: digit {} (value {}) → running total {}",
                position, digit, digit_value, total
            ),
            DigitStep::Fraction {
                fraction,
                base,
                product,
                digit,
            } => write!(
                f,
                "{:.6} × {} = {:.6} → {}",
                fraction, base, product, digit
            ),
        }
    }
}

/// A single line of narration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TraceLine {
    /// Free-form explanation
    Note(String),
    /// Column header for the digit records that follow
    Heading(String),
    /// Exactly one per digit processed
    Digit(DigitStep),
    /// Boundary between the legs of a multi-stage conversion
    Section(String),
    /// Statement of the algebraic identity between input and output
    Summary(String),
}

/// Ordered, append-only record of a conversion's arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionTrace {
    lines: Vec<TraceLine>,
    result: Option<String>,
}

impl ConversionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Per-digit records in processing order.
    pub fn digit_steps(&self) -> impl Iterator<Item = &DigitStep> {
        self.lines.iter().filter_map(|line| match line {
            TraceLine::Digit(step) => Some(step),
            _ => None,
        })
    }

    /// The final result as stated by the last summary line.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

/// Receiver for narration emitted by the conversion algorithms.
///
/// Closures are only invoked when the sink actually records, so the plain
/// operations pay nothing for formatting.
pub trait StepSink {
    fn record(&mut self, line: impl FnOnce() -> TraceLine);

    /// Record the closing summary and the textual result it asserts.
    fn conclude(&mut self, summary: impl FnOnce() -> String, result: impl FnOnce() -> String);

    fn note(&mut self, text: impl FnOnce() -> String) {
        self.record(|| TraceLine::Note(text()));
    }

    fn heading(&mut self, text: impl FnOnce() -> String) {
        self.record(|| TraceLine::Heading(text()));
    }

    fn section(&mut self, text: impl FnOnce() -> String) {
        self.record(|| TraceLine::Section(text()));
    }

    fn digit(&mut self, step: DigitStep) {
        self.record(|| TraceLine::Digit(step));
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl StepSink for NoTrace {
    fn record(&mut self, _line: impl FnOnce() -> TraceLine) {}

    fn conclude(&mut self, _summary: impl FnOnce() -> String, _result: impl FnOnce() -> String) {}
}

impl StepSink for ConversionTrace {
    fn record(&mut self, line: impl FnOnce() -> TraceLine) {
        self.lines.push(line());
    }

    fn conclude(&mut self, summary: impl FnOnce() -> String, result: impl FnOnce() -> String) {
        self.lines.push(TraceLine::Summary(summary()));
        self.result = Some(result());
    }
}

/// A value together with the narration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traced<T> {
    pub value: T,
    pub trace: ConversionTrace,
}

impl<T> Traced<T> {
    /// Run `op` against a fresh trace and pair its output with the narration.
    pub(crate) fn capture<E>(
        op: impl FnOnce(&mut ConversionTrace) -> Result<T, E>,
    ) -> Result<Self, E> {
        let mut trace = ConversionTrace::new();
        let value = op(&mut trace)?;
        Ok(Self { value, trace })
    }
}
