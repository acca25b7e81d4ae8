//! Interactive menu loop
//!
//! Each menu entry collects its inputs through the prompts, builds the same
//! [`Commands`] value a one-shot invocation would, and hands it to
//! [`execute`]. Steps are always shown here.

use std::fmt;

use anyhow::Result;
use dialoguer::Select;
use tracing::{debug, warn};

use super::args::{Commands, Settings};
use super::command::execute;
use super::prompts::{
    confirm_another, prompt_base, prompt_character, prompt_code_point, prompt_float,
    prompt_integer, prompt_numeral, prompt_text,
};
use crate::engine::{Base, Route, DEFAULT_PRECISION};
use crate::report::print_outcome;
use crate::utils::{print_banner, print_error, print_goodbye, print_info, print_success, Theme};

/// Menu group, shown as a prefix on each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    Decimal,
    Cross,
    Advanced,
}

impl MenuGroup {
    fn tag(self) -> &'static str {
        match self {
            MenuGroup::Decimal => "Decimal",
            MenuGroup::Cross => "Cross-base",
            MenuGroup::Advanced => "Advanced",
        }
    }
}

/// What a menu entry does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToBin,
    ToOct,
    ToHex,
    ToDecimal(Base),
    Route(Route),
    ToBase,
    FromBase,
    Float,
    CodeToChar,
    CharToCode,
    Detect,
    All,
    ToggleTheme,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub group: Option<MenuGroup>,
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    fn new(group: MenuGroup, label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            group: Some(group),
            label: label.into(),
            action,
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.group {
            Some(group) => write!(f, "{:<11} {}", group.tag(), self.label),
            None => f.write_str(&self.label),
        }
    }
}

/// All menu entries in display order, ending with Quit.
pub fn menu_items() -> Vec<MenuItem> {
    use MenuAction::*;
    use MenuGroup::*;

    let mut items = vec![
        MenuItem::new(Decimal, "Decimal → Binary", ToBin),
        MenuItem::new(Decimal, "Binary → Decimal", ToDecimal(Base::BINARY)),
        MenuItem::new(Decimal, "Decimal → Octal", ToOct),
        MenuItem::new(Decimal, "Octal → Decimal", ToDecimal(Base::OCTAL)),
        MenuItem::new(Decimal, "Decimal → Hexadecimal", ToHex),
        MenuItem::new(Decimal, "Hexadecimal → Decimal", ToDecimal(Base::HEXADECIMAL)),
    ];

    items.extend(
        [
            crate::engine::Route::BinToOct,
            crate::engine::Route::OctToBin,
            crate::engine::Route::BinToHex,
            crate::engine::Route::HexToBin,
            crate::engine::Route::OctToHex,
            crate::engine::Route::HexToOct,
        ]
        .into_iter()
        .map(|route| MenuItem::new(Cross, route.label(), Route(route))),
    );

    items.extend([
        MenuItem::new(Advanced, "Decimal → Any Base (2-16)", ToBase),
        MenuItem::new(Advanced, "Any Base (2-16) → Decimal", FromBase),
        MenuItem::new(Advanced, "Decimal Float → Any Base", Float),
        MenuItem::new(Advanced, "Code Point → Character", CodeToChar),
        MenuItem::new(Advanced, "Character → Code Point", CharToCode),
        MenuItem::new(Advanced, "Detect Number Base", Detect),
        MenuItem::new(Advanced, "Show In All Bases", All),
        MenuItem::new(Advanced, "Toggle Colour Theme", ToggleTheme),
    ]);

    items.push(MenuItem {
        group: None,
        label: "Quit".to_string(),
        action: Quit,
    });
    items
}

/// Collect the inputs for `action` and build the command to run.
///
/// Returns `None` for entries that are not conversions.
fn build_command(action: MenuAction) -> Result<Option<Commands>> {
    let command = match action {
        MenuAction::ToBin => Commands::ToBin {
            number: prompt_integer("Decimal number")?,
            pure_twos_complement: false,
        },
        MenuAction::ToOct => Commands::ToOct {
            number: prompt_integer("Decimal number")?,
        },
        MenuAction::ToHex => Commands::ToHex {
            number: prompt_integer("Decimal number")?,
        },
        MenuAction::ToDecimal(base) => Commands::FromBase {
            numeral: prompt_numeral(&format!("Number in {}", base.name()), base)?,
            base,
        },
        MenuAction::Route(route) => {
            let (from, _) = route.bases();
            Commands::Route {
                route,
                numeral: prompt_numeral(&format!("Number in {}", from.name()), from)?,
            }
        }
        MenuAction::ToBase => {
            let number = prompt_integer("Decimal number")?;
            let base = prompt_base("Target base (2-16)")?;
            Commands::ToBase { number, base }
        }
        MenuAction::FromBase => {
            let base = prompt_base("Source base (2-16)")?;
            let numeral = prompt_numeral(&format!("Number in base {}", base), base)?;
            Commands::FromBase { numeral, base }
        }
        MenuAction::Float => {
            let value = prompt_float("Decimal number")?;
            let base = prompt_base("Target base (2-16)")?;
            Commands::Float {
                value,
                base,
                precision: DEFAULT_PRECISION,
            }
        }
        MenuAction::CodeToChar => Commands::CodeToChar {
            code_point: prompt_code_point("Code point")?,
        },
        MenuAction::CharToCode => Commands::CharToCode {
            character: prompt_character("Character")?,
        },
        MenuAction::Detect => Commands::Detect {
            input: prompt_text("Number (prefixes 0b, 0o, 0x are recognised)")?,
        },
        MenuAction::All => Commands::All {
            number: prompt_integer("Decimal number")?,
        },
        MenuAction::ToggleTheme | MenuAction::Quit => return Ok(None),
    };
    Ok(Some(command))
}

/// Run the interactive menu until the user quits.
pub fn run_menu(settings: Settings) -> Result<()> {
    let mut theme = settings.theme;
    let items = menu_items();

    print_banner(env!("CARGO_PKG_VERSION"), theme);
    print_info("Every conversion is shown step by step. Choose Quit to exit.");

    loop {
        let selection = Select::new()
            .with_prompt("Choose a conversion")
            .items(&items)
            .default(0)
            .interact()?;
        let action = items[selection].action;
        debug!(?action, "menu selection");

        match action {
            MenuAction::Quit => break,
            MenuAction::ToggleTheme => {
                theme = theme.toggled();
                print_success(&format!("Switched to {} theme", theme), theme);
                continue;
            }
            _ => {}
        }

        if let Some(command) = build_command(action)? {
            run_one(&command, theme);
        }

        if !confirm_another()? {
            break;
        }
    }

    print_goodbye(theme);
    Ok(())
}

fn run_one(command: &Commands, theme: Theme) {
    match execute(command, true) {
        Ok(outcome) => print_outcome(&outcome, theme),
        Err(e) => {
            warn!(error = %e, "conversion failed");
            print_error(&e.to_string(), theme);
        }
    }
}
