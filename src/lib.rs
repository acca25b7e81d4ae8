//! numbase: Number Base Conversion Library
//!
//! Converts integers, floats and code points between bases 2 through 16,
//! optionally narrating every step of the arithmetic.

pub mod cli;
pub mod engine;
pub mod report;
pub mod utils;
