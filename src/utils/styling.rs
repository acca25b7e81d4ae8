//! Terminal styling utilities
//!
//! Colours are chosen from an explicit [`Theme`] value handed down by the
//! caller; there is no global colour state.

use clap::ValueEnum;
use console::{style, Emoji, Style};
use serde::Serialize;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", ">> ");
pub static ABACUS: Emoji<'_, '_> = Emoji("🧮 ", "");
pub static CROSS: Emoji<'_, '_> = Emoji("✗  ", "x ");

/// Colour scheme for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Bright colours for dark terminal backgrounds
    #[default]
    Dark,
    /// Regular colours for light terminal backgrounds
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn tone(self, style: Style) -> Style {
        match self {
            Theme::Dark => style.bright(),
            Theme::Light => style,
        }
    }

    /// Section titles and rules
    pub fn accent(self) -> Style {
        self.tone(Style::new().cyan().bold())
    }

    /// Results and success messages
    pub fn success(self) -> Style {
        self.tone(Style::new().green().bold())
    }

    /// Table headings and menu numbers
    pub fn highlight(self) -> Style {
        self.tone(Style::new().yellow().bold())
    }

    /// Section boundaries inside a trace
    pub fn section(self) -> Style {
        self.tone(Style::new().magenta().bold())
    }

    pub fn error(self) -> Style {
        self.tone(Style::new().red().bold())
    }

    /// Colour for table cells, matching [`Theme::accent`]
    pub fn table_color(self) -> comfy_table::Color {
        match self {
            Theme::Dark => comfy_table::Color::Cyan,
            Theme::Light => comfy_table::Color::DarkCyan,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Print the application banner
pub fn print_banner(version: &str, theme: Theme) {
    let rule = "═".repeat(50);
    println!();
    println!("    {}", theme.accent().apply_to(&rule));
    println!(
        "    {}{}",
        ABACUS,
        theme.success().apply_to("Number Base Converter")
    );
    println!(
        "    {}",
        style(format!("v{} · bases 2-16 · step-by-step explanations", version)).dim()
    );
    println!("    {}", theme.accent().apply_to(&rule));
    println!();
}

/// Print a header for a single conversion
pub fn print_conversion_header(title: &str, theme: Theme) {
    println!();
    println!(
        "    {} {} {}",
        theme.accent().apply_to("CONVERSION"),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str, theme: Theme) {
    println!("    {} {}", theme.success().apply_to("✓"), theme.success().apply_to(message));
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print an error message without aborting
pub fn print_error(message: &str, theme: Theme) {
    println!("    {}{}", CROSS, theme.error().apply_to(format!("Error: {}", message)));
}

/// Print the farewell message
pub fn print_goodbye(theme: Theme) {
    println!();
    println!(
        "    {}{}",
        SPARKLE,
        theme
            .success()
            .apply_to("Thank you for using the Number Base Converter. Good-bye!")
    );
    println!();
}
