//! Interactive prompts using dialoguer
//!
//! Every prompt re-asks until the input is valid, so callers only see
//! values the engine will accept.

use anyhow::Result;
use dialoguer::{Confirm, Input};

use crate::engine::{Base, Numeral, MAX_CODE_POINT};

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Ask whether to run another conversion
pub fn confirm_another() -> Result<bool> {
    confirm_step("Perform another conversion?")
}

/// Prompt for a decimal integer
pub fn prompt_integer(prompt: &str) -> Result<i64> {
    let value = Input::<i64>::new().with_prompt(prompt).interact_text()?;
    Ok(value)
}

/// Prompt for a decimal floating-point number
pub fn prompt_float(prompt: &str) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .validate_with(|v: &f64| -> std::result::Result<(), String> {
            if v.is_finite() {
                Ok(())
            } else {
                Err("value must be a finite number".to_string())
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Prompt for a base between 2 and 16
pub fn prompt_base(prompt: &str) -> Result<Base> {
    let value = Input::<i64>::new()
        .with_prompt(prompt)
        .validate_with(|v: &i64| -> std::result::Result<(), String> {
            Base::new(*v).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(Base::new(value)?)
}

/// Prompt for a numeral written in `base`
pub fn prompt_numeral(prompt: &str, base: Base) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            Numeral::parse(s, base).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Prompt for any text; used for the base detector
pub fn prompt_text(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            if s.trim().is_empty() {
                Err("input must not be empty".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Prompt for exactly one character
pub fn prompt_character(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            match s.chars().count() {
                1 => Ok(()),
                n => Err(format!("enter exactly one character (got {})", n)),
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Prompt for a code point in the valid range
pub fn prompt_code_point(prompt: &str) -> Result<i64> {
    let value = Input::<i64>::new()
        .with_prompt(prompt)
        .validate_with(|v: &i64| -> std::result::Result<(), String> {
            if (0..=i64::from(MAX_CODE_POINT)).contains(v) {
                Ok(())
            } else {
                Err(format!("code point must be between 0 and {}", MAX_CODE_POINT))
            }
        })
        .interact_text()?;
    Ok(value)
}
