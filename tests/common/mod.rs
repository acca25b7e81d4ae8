//! Shared test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use numbase::engine::{Base, ConversionTrace, TraceLine};

/// Build a base that is known to be valid
pub fn base(radix: i64) -> Base {
    Base::new(radix).expect("test base must be in range")
}

/// Every base the engine supports
pub fn all_bases() -> impl Iterator<Item = Base> {
    (2..=16).map(base)
}

/// Number of per-digit records in a trace
pub fn digit_records(trace: &ConversionTrace) -> usize {
    trace.digit_steps().count()
}

/// Text of every summary line in a trace, in order
pub fn summaries(trace: &ConversionTrace) -> Vec<&str> {
    trace
        .lines()
        .iter()
        .filter_map(|line| match line {
            TraceLine::Summary(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

/// Text of every note and section line, joined for substring checks
pub fn narration(trace: &ConversionTrace) -> String {
    trace
        .lines()
        .iter()
        .filter_map(|line| match line {
            TraceLine::Note(text) | TraceLine::Section(text) | TraceLine::Heading(text) => {
                Some(text.as_str())
            }
            TraceLine::Summary(text) => Some(text.as_str()),
            TraceLine::Digit(_) => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The compiled binary, with logging silenced
pub fn numbase() -> Command {
    let mut cmd = Command::cargo_bin("numbase").expect("binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}
