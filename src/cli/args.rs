//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};

use crate::engine::{Base, Route, DEFAULT_PRECISION};
use crate::utils::Theme;

/// numbase - Convert numbers between bases 2-16, with step-by-step explanations.
/// Run without a subcommand for the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "numbase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show the step-by-step conversion process
    #[arg(short, long, global = true, default_value = "false")]
    pub steps: bool,

    /// Colour theme for terminal output
    #[arg(long, value_enum, global = true, default_value = "dark")]
    pub theme: Theme,

    /// Print the result as JSON instead of styled text
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,
}

/// One conversion per variant. The interactive menu builds these too.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Convert a decimal integer to any base (2-16)
    ToBase {
        /// Decimal integer, may be negative
        #[arg(allow_hyphen_values = true)]
        number: i64,

        /// Target base (2-16)
        #[arg(short, long, value_parser = parse_base)]
        base: Base,
    },

    /// Convert a number in any base (2-16) to decimal
    FromBase {
        /// Digits in the source base, optionally prefixed with '-'
        #[arg(allow_hyphen_values = true)]
        numeral: String,

        /// Source base (2-16)
        #[arg(short, long, value_parser = parse_base)]
        base: Base,
    },

    /// Convert a decimal integer to binary using bit shifts
    ToBin {
        #[arg(allow_hyphen_values = true)]
        number: i64,

        /// Print negative numbers as bare two's complement, without the '-' prefix
        #[arg(long, default_value = "false")]
        pure_twos_complement: bool,
    },

    /// Convert a decimal integer to octal using bit shifts
    ToOct {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Convert a decimal integer to hexadecimal using bit shifts
    ToHex {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Convert between any two bases via decimal
    Bridge {
        #[arg(allow_hyphen_values = true)]
        numeral: String,

        /// Source base (2-16)
        #[arg(long, value_parser = parse_base)]
        from: Base,

        /// Target base (2-16)
        #[arg(long, value_parser = parse_base)]
        to: Base,
    },

    /// Run one of the named conversions, e.g. bin-to-oct or hex-to-dec
    Route {
        /// Conversion name: {dec,bin,oct,hex}-to-{dec,bin,oct,hex}
        route: Route,

        #[arg(allow_hyphen_values = true)]
        numeral: String,
    },

    /// Convert a decimal floating-point number to any base (2-16)
    Float {
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Target base (2-16)
        #[arg(short, long, value_parser = parse_base)]
        base: Base,

        /// Maximum number of fractional digits
        #[arg(short, long, default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
        precision: usize,
    },

    /// Show the code point of a single character
    CharToCode {
        #[arg(allow_hyphen_values = true)]
        character: String,
    },

    /// Show the character for a code point (0-1114111)
    CodeToChar {
        #[arg(allow_hyphen_values = true)]
        code_point: i64,
    },

    /// Guess the base of a number from its prefix or digits
    Detect {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Show a decimal integer in binary, octal, decimal and hexadecimal
    All {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },
}

/// Presentation settings shared by one-shot commands and the menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub show_steps: bool,
    pub theme: Theme,
    pub json: bool,
}

impl Cli {
    /// Presentation settings derived from the global flags.
    pub fn settings(&self) -> Settings {
        Settings {
            show_steps: self.steps,
            theme: self.theme,
            json: self.json,
        }
    }
}

/// Validator for base arguments
pub fn parse_base(s: &str) -> Result<Base, String> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid base", s))?;
    Base::new(value).map_err(|e| e.to_string())
}

/// Validator for the precision parameter
fn parse_precision(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("precision must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
