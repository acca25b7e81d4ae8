//! Base-to-base conversion routed through a decimal intermediate
//!
//! Every conversion here is `to_base(from_base(input, from), to)`; there is
//! no digit-regrouping shortcut, so the integer converter stays the single
//! source of truth for the arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::base::Base;
use super::error::Result;
use super::integer::{from_base_with, to_base_with};
use super::numeral::Numeral;
use super::trace::{NoTrace, StepSink, Traced};

/// Convert `input`, written in `from`, to its numeral in `to`.
pub fn convert(input: &str, from: Base, to: Base) -> Result<Numeral> {
    convert_with(input, from, to, &mut NoTrace)
}

/// [`convert`] with both legs narrated, separated by section markers.
pub fn convert_traced(input: &str, from: Base, to: Base) -> Result<Traced<Numeral>> {
    Traced::capture(|trace| convert_with(input, from, to, trace))
}

fn convert_with<S: StepSink>(input: &str, from: Base, to: Base, sink: &mut S) -> Result<Numeral> {
    sink.note(|| {
        format!(
            "Starting {} to {} conversion of {}",
            from.name(),
            to.name(),
            input
        )
    });
    sink.section(|| format!("Step 1: Convert {} to decimal", from.name()));
    let value = from_base_with(input, from, sink)?;

    sink.section(|| format!("Step 2: Convert decimal to {}", to.name()));
    let numeral = to_base_with(value, to, sink);

    sink.section(|| "Summary".to_string());
    sink.conclude(
        || {
            format!(
                "Complete conversion: {} ({}) = {} ({})",
                input,
                from.name(),
                numeral,
                to.name()
            )
        },
        || numeral.to_string(),
    );
    Ok(numeral)
}

/// The twelve named conversions between binary, octal, decimal and
/// hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    DecToBin,
    BinToDec,
    DecToOct,
    OctToDec,
    DecToHex,
    HexToDec,
    BinToOct,
    OctToBin,
    BinToHex,
    HexToBin,
    OctToHex,
    HexToOct,
}

impl Route {
    pub const ALL: [Route; 12] = [
        Route::DecToBin,
        Route::BinToDec,
        Route::DecToOct,
        Route::OctToDec,
        Route::DecToHex,
        Route::HexToDec,
        Route::BinToOct,
        Route::OctToBin,
        Route::BinToHex,
        Route::HexToBin,
        Route::OctToHex,
        Route::HexToOct,
    ];

    /// Source and target base.
    pub fn bases(self) -> (Base, Base) {
        use Route::*;
        let (bin, oct, dec, hex) = (Base::BINARY, Base::OCTAL, Base::DECIMAL, Base::HEXADECIMAL);
        match self {
            DecToBin => (dec, bin),
            BinToDec => (bin, dec),
            DecToOct => (dec, oct),
            OctToDec => (oct, dec),
            DecToHex => (dec, hex),
            HexToDec => (hex, dec),
            BinToOct => (bin, oct),
            OctToBin => (oct, bin),
            BinToHex => (bin, hex),
            HexToBin => (hex, bin),
            OctToHex => (oct, hex),
            HexToOct => (hex, oct),
        }
    }

    /// Command-line spelling, e.g. `bin-to-oct`.
    pub fn name(self) -> &'static str {
        use Route::*;
        match self {
            DecToBin => "dec-to-bin",
            BinToDec => "bin-to-dec",
            DecToOct => "dec-to-oct",
            OctToDec => "oct-to-dec",
            DecToHex => "dec-to-hex",
            HexToDec => "hex-to-dec",
            BinToOct => "bin-to-oct",
            OctToBin => "oct-to-bin",
            BinToHex => "bin-to-hex",
            HexToBin => "hex-to-bin",
            OctToHex => "oct-to-hex",
            HexToOct => "hex-to-oct",
        }
    }

    /// Menu label, e.g. `Binary → Octal`.
    pub fn label(self) -> String {
        let (from, to) = self.bases();
        format!("{} → {}", capitalize(&from.name()), capitalize(&to.name()))
    }

    pub fn convert(self, input: &str) -> Result<Numeral> {
        let (from, to) = self.bases();
        convert(input, from, to)
    }

    pub fn convert_traced(self, input: &str) -> Result<Traced<Numeral>> {
        let (from, to) = self.bases();
        convert_traced(input, from, to)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Route::ALL.iter().map(|r| r.name()).collect();
                format!("unknown route '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
