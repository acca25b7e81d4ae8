//! Styled text and JSON rendering of an [`Outcome`]

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use super::outcome::Outcome;
use crate::engine::{ConversionTrace, DigitStep, TraceLine};
use crate::utils::{print_conversion_header, Theme};

/// Print an outcome: header, result, extra views and, if present, the steps.
pub fn print_outcome(outcome: &Outcome, theme: Theme) {
    print_conversion_header(&outcome.operation, theme);
    println!("      Input:  {}", style(&outcome.input).dim());
    println!(
        "      {} {}",
        theme.success().apply_to("Result:"),
        theme.accent().apply_to(&outcome.result)
    );

    if !outcome.views.is_empty() {
        println!();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Base").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);
        for view in &outcome.views {
            table.add_row(vec![
                Cell::new(&view.label),
                Cell::new(&view.value).fg(theme.table_color()),
            ]);
        }
        print_indented(&table);
    }

    if let Some(trace) = &outcome.steps {
        println!();
        println!(
            "    {} {}",
            theme.highlight().apply_to("◆"),
            theme.highlight().apply_to("Step-by-Step Conversion Process")
        );
        println!("    {}", style("─".repeat(50)).dim());
        for line in render_steps(trace, theme) {
            println!("    {}", line);
        }
    }
    println!();
}

/// Serialize an outcome as pretty-printed JSON.
pub fn outcome_json(outcome: &Outcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("Failed to serialize conversion result")
}

/// Render a trace as display lines.
///
/// Runs of digit records become one table, using the preceding heading's
/// `|`-separated columns as the table header. Every other line is styled
/// by kind.
pub fn render_steps(trace: &ConversionTrace, theme: Theme) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending: Option<(Table, usize)> = None;

    for line in trace.lines() {
        match line {
            TraceLine::Heading(text) => {
                flush_table(&mut pending, &mut out);
                pending = Some((digit_table(text.split(" | ")), 0));
            }
            TraceLine::Digit(step) => {
                let (table, count) =
                    pending.get_or_insert_with(|| (digit_table(default_columns(step)), 0));
                *count += 1;
                table.add_row(digit_row(*count, step, theme));
            }
            TraceLine::Note(text) => {
                flush_table(&mut pending, &mut out);
                out.push(text.clone());
            }
            TraceLine::Section(text) => {
                flush_table(&mut pending, &mut out);
                out.push(String::new());
                out.push(theme.section().apply_to(format!("── {} ──", text)).to_string());
            }
            TraceLine::Summary(text) => {
                flush_table(&mut pending, &mut out);
                out.push(theme.success().apply_to(text).to_string());
            }
        }
    }
    flush_table(&mut pending, &mut out);
    out
}

fn digit_table<'a>(columns: impl IntoIterator<Item = &'a str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        columns
            .into_iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn default_columns(step: &DigitStep) -> Vec<&'static str> {
    match step {
        DigitStep::Division { .. } => vec!["Step", "Decimal", "Base", "Remainder", "Digit"],
        DigitStep::Accumulate { .. } => vec!["Position", "Digit", "Digit Value", "Running Total"],
        DigitStep::Fraction { .. } => vec!["Step", "Fractional", "Base", "Result", "Integer Part"],
    }
}

fn digit_row(index: usize, step: &DigitStep, theme: Theme) -> Vec<Cell> {
    let digit = |d: &char| Cell::new(d).fg(theme.table_color()).add_attribute(Attribute::Bold);
    match step {
        DigitStep::Division {
            working,
            base,
            remainder,
            digit: d,
        } => vec![
            Cell::new(index),
            Cell::new(working),
            Cell::new(base),
            Cell::new(remainder),
            digit(d),
        ],
        DigitStep::Accumulate {
            position,
            digit: d,
            digit_value,
            total,
        } => vec![
            Cell::new(position),
            digit(d),
            Cell::new(digit_value),
            Cell::new(total),
        ],
        DigitStep::Fraction {
            fraction,
            base,
            product,
            digit: d,
        } => vec![
            Cell::new(index),
            Cell::new(format!("{:.6}", fraction)),
            Cell::new(base),
            Cell::new(format!("{:.6}", product)),
            digit(d),
        ],
    }
}

fn flush_table(pending: &mut Option<(Table, usize)>, out: &mut Vec<String>) {
    if let Some((table, _)) = pending.take() {
        out.extend(table.to_string().lines().map(str::to_string));
    }
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{to_base_traced, Base};

    #[test]
    fn digit_records_become_table_rows() {
        let traced = to_base_traced(255, Base::HEXADECIMAL);
        let lines = render_steps(&traced.trace, Theme::Light);
        let text = lines.join("\n");
        assert!(text.contains("Remainder"), "table header missing:\n{}", text);
        assert!(text.contains("Final result: 255 in decimal = FF in hexadecimal"));
    }
}
