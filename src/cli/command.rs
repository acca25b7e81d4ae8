//! Dispatch of a parsed command to the conversion engine

use anyhow::Result;
use tracing::debug;

use super::args::Commands;
use crate::engine::{
    self, char_to_code, char_to_code_traced, code_to_char, code_to_char_traced, convert,
    convert_traced, dec_to_bin, dec_to_bin_traced, dec_to_hex, dec_to_hex_traced, dec_to_oct,
    dec_to_oct_traced, detect_base, from_base, from_base_traced, to_base, to_base_float,
    to_base_float_traced, to_base_traced, Base, BinaryMode, ConversionTrace, StepSink, Traced,
};
use crate::report::Outcome;

/// Binary rendering selected by the `--pure-twos-complement` flag.
pub fn binary_mode(pure_twos_complement: bool) -> BinaryMode {
    if pure_twos_complement {
        BinaryMode::TwosComplement
    } else {
        BinaryMode::SignedTwosComplement
    }
}

/// Run one conversion. With `show_steps` the engine's traced variant is
/// used and the narration is attached to the outcome.
pub fn execute(command: &Commands, show_steps: bool) -> Result<Outcome> {
    debug!(?command, show_steps, "dispatching conversion");

    let outcome = match command {
        Commands::ToBase { number, base } => infallible(
            format!("Decimal → Base {}", base),
            number,
            show_steps,
            || to_base(*number, *base),
            || to_base_traced(*number, *base),
        ),
        Commands::FromBase { numeral, base } => fallible(
            format!("Base {} → Decimal", base),
            numeral,
            show_steps,
            || from_base(numeral, *base),
            || from_base_traced(numeral, *base),
        )?,
        Commands::ToBin {
            number,
            pure_twos_complement,
        } => {
            let mode = binary_mode(*pure_twos_complement);
            infallible(
                "Decimal → Binary",
                number,
                show_steps,
                || dec_to_bin(*number, mode),
                || dec_to_bin_traced(*number, mode),
            )
        }
        Commands::ToOct { number } => infallible(
            "Decimal → Octal",
            number,
            show_steps,
            || dec_to_oct(*number),
            || dec_to_oct_traced(*number),
        ),
        Commands::ToHex { number } => infallible(
            "Decimal → Hexadecimal",
            number,
            show_steps,
            || dec_to_hex(*number),
            || dec_to_hex_traced(*number),
        ),
        Commands::Bridge { numeral, from, to } => fallible(
            format!("Base {} → Base {}", from, to),
            numeral,
            show_steps,
            || convert(numeral, *from, *to),
            || convert_traced(numeral, *from, *to),
        )?,
        Commands::Route { route, numeral } => fallible(
            route.label(),
            numeral,
            show_steps,
            || route.convert(numeral),
            || route.convert_traced(numeral),
        )?,
        Commands::Float {
            value,
            base,
            precision,
        } => fallible(
            format!("Decimal Float → Base {}", base),
            value,
            show_steps,
            || to_base_float(*value, *base, *precision),
            || to_base_float_traced(*value, *base, *precision),
        )?,
        Commands::CharToCode { character } => fallible(
            "Character → Code Point",
            character,
            show_steps,
            || char_to_code(character),
            || char_to_code_traced(character),
        )?,
        Commands::CodeToChar { code_point } => fallible(
            "Code Point → Character",
            code_point,
            show_steps,
            || code_to_char(*code_point),
            || code_to_char_traced(*code_point),
        )?,
        Commands::Detect { input } => detect(input, show_steps),
        Commands::All { number } => all_bases(*number, show_steps),
    };

    debug!(result = %outcome.result, "conversion finished");
    Ok(outcome)
}

fn infallible<T: ToString>(
    operation: impl Into<String>,
    input: impl ToString,
    show_steps: bool,
    plain: impl FnOnce() -> T,
    traced: impl FnOnce() -> Traced<T>,
) -> Outcome {
    if show_steps {
        Outcome::from_traced(operation, input.to_string(), traced())
    } else {
        Outcome::new(operation, input.to_string(), plain())
    }
}

fn fallible<T: ToString>(
    operation: impl Into<String>,
    input: impl ToString,
    show_steps: bool,
    plain: impl FnOnce() -> engine::Result<T>,
    traced: impl FnOnce() -> engine::Result<Traced<T>>,
) -> Result<Outcome> {
    let operation = operation.into();
    let input = input.to_string();
    let outcome = if show_steps {
        Outcome::from_traced(&operation, &input, traced()?)
    } else {
        Outcome::new(&operation, &input, plain()?)
    };
    Ok(outcome)
}

fn detect(input: &str, show_steps: bool) -> Outcome {
    let result = match detect_base(input) {
        Some(base) => format!("{} ({})", base, base.name()),
        None => "unknown".to_string(),
    };

    let mut outcome = Outcome::new("Number Base Detection", input, &result);
    if show_steps {
        let mut trace = ConversionTrace::new();
        trace.conclude(
            || format!("Detected base for '{}': {}", input, result),
            || result.clone(),
        );
        outcome.steps = Some(trace);
    }
    outcome
}

fn all_bases(number: i64, show_steps: bool) -> Outcome {
    let bases = [
        ("Binary", Base::BINARY),
        ("Octal", Base::OCTAL),
        ("Decimal", Base::DECIMAL),
        ("Hexadecimal", Base::HEXADECIMAL),
    ];

    let mut outcome = Outcome::new("Decimal → All Bases", number.to_string(), number);
    let mut combined = ConversionTrace::new();
    for (label, base) in bases {
        if show_steps {
            let traced = to_base_traced(number, base);
            combined.section(|| format!("{} ({})", label, base));
            for line in traced.trace.lines() {
                combined.record(|| line.clone());
            }
            outcome = outcome.with_view(label, traced.value);
        } else {
            outcome = outcome.with_view(label, to_base(number, base));
        }
    }

    if show_steps {
        combined.conclude(
            || format!("{} shown in bases 2, 8, 10 and 16", number),
            || number.to_string(),
        );
        outcome.steps = Some(combined);
    }
    outcome
}
