//! Tests for CLI argument parsing and command dispatch

mod common;

use clap::Parser;
use numbase::cli::{binary_mode, execute, menu_items, parse_base, Cli, Commands, MenuAction};
use numbase::engine::{Base, BinaryMode, Route, DEFAULT_PRECISION};
use numbase::utils::Theme;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["numbase"]);

    assert!(cli.command.is_none(), "No subcommand should start the menu");
    assert!(!cli.steps, "Steps should be off by default");
    assert_eq!(cli.theme, Theme::Dark, "Default theme should be dark");
    assert!(!cli.json, "JSON output should be off by default");
    assert!(!cli.verbose, "Verbose logging should be off by default");
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "numbase", "to-hex", "255", "--steps", "--theme", "light", "--json",
    ]);

    let settings = cli.settings();
    assert!(settings.show_steps);
    assert!(settings.json);
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(cli.command, Some(Commands::ToHex { number: 255 }));
}

#[test]
fn test_cli_to_base() {
    let cli = Cli::parse_from(["numbase", "to-base", "255", "--base", "16"]);
    assert_eq!(
        cli.command,
        Some(Commands::ToBase {
            number: 255,
            base: Base::HEXADECIMAL
        })
    );
}

#[test]
fn test_cli_accepts_negative_numbers() {
    let cli = Cli::parse_from(["numbase", "to-bin", "-5"]);
    assert_eq!(
        cli.command,
        Some(Commands::ToBin {
            number: -5,
            pure_twos_complement: false
        })
    );

    let cli = Cli::parse_from(["numbase", "from-base", "-ff", "-b", "16"]);
    assert_eq!(
        cli.command,
        Some(Commands::FromBase {
            numeral: "-ff".to_string(),
            base: Base::HEXADECIMAL
        })
    );
}

#[test]
fn test_cli_rejects_out_of_range_base() {
    for bad in ["1", "17", "0", "ten"] {
        let result = Cli::try_parse_from(["numbase", "to-base", "10", "--base", bad]);
        assert!(result.is_err(), "base '{}' should be rejected", bad);
    }
}

#[test]
fn test_parse_base_validator() {
    assert_eq!(parse_base("2"), Ok(Base::BINARY));
    assert_eq!(parse_base(" 16 "), Ok(Base::HEXADECIMAL));
    assert!(parse_base("17").unwrap_err().contains("between 2 and 16"));
    assert!(parse_base("x").is_err());
}

#[test]
fn test_cli_float_precision() {
    let cli = Cli::parse_from(["numbase", "float", "0.1", "-b", "2"]);
    match cli.command {
        Some(Commands::Float { precision, .. }) => assert_eq!(precision, DEFAULT_PRECISION),
        other => panic!("expected float command, got {:?}", other),
    }

    let cli = Cli::parse_from(["numbase", "float", "0.1", "-b", "2", "-p", "4"]);
    match cli.command {
        Some(Commands::Float { precision, .. }) => assert_eq!(precision, 4),
        other => panic!("expected float command, got {:?}", other),
    }

    assert!(Cli::try_parse_from(["numbase", "float", "0.1", "-b", "2", "-p", "0"]).is_err());
}

#[test]
fn test_cli_route_names() {
    let cli = Cli::parse_from(["numbase", "route", "bin-to-oct", "101010"]);
    assert_eq!(
        cli.command,
        Some(Commands::Route {
            route: Route::BinToOct,
            numeral: "101010".to_string()
        })
    );
    assert!(Cli::try_parse_from(["numbase", "route", "bin-to-base3", "1"]).is_err());
}

#[test]
fn test_binary_mode_flag() {
    assert_eq!(binary_mode(false), BinaryMode::SignedTwosComplement);
    assert_eq!(binary_mode(true), BinaryMode::TwosComplement);
}

#[test]
fn test_execute_plain_has_no_steps() {
    let outcome = execute(
        &Commands::ToBase {
            number: 255,
            base: Base::HEXADECIMAL,
        },
        false,
    )
    .unwrap();
    assert_eq!(outcome.result, "FF");
    assert_eq!(outcome.input, "255");
    assert!(outcome.steps.is_none());
}

#[test]
fn test_execute_with_steps_attaches_trace() {
    let outcome = execute(
        &Commands::Bridge {
            numeral: "FF".to_string(),
            from: Base::HEXADECIMAL,
            to: Base::BINARY,
        },
        true,
    )
    .unwrap();
    assert_eq!(outcome.result, "11111111");
    let trace = outcome.steps.expect("steps requested");
    assert_eq!(trace.result(), Some("11111111"));
}

#[test]
fn test_execute_propagates_engine_errors() {
    let err = execute(
        &Commands::FromBase {
            numeral: "129".to_string(),
            base: Base::OCTAL,
        },
        false,
    )
    .unwrap_err();
    assert!(err.to_string().contains("'9' is not a base-8 digit"), "{}", err);
}

#[test]
fn test_execute_detect_and_all() {
    let outcome = execute(&Commands::Detect { input: "0x1F".to_string() }, false).unwrap();
    assert_eq!(outcome.result, "16 (hexadecimal)");

    let outcome = execute(&Commands::Detect { input: "xyz".to_string() }, false).unwrap();
    assert_eq!(outcome.result, "unknown");

    let outcome = execute(&Commands::All { number: 10 }, false).unwrap();
    let values: Vec<_> = outcome.views.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, vec!["1010", "12", "10", "A"]);
}

#[test]
fn test_menu_offers_every_conversion() {
    let items = menu_items();
    for action in [
        MenuAction::ToBin,
        MenuAction::ToDecimal(Base::HEXADECIMAL),
        MenuAction::Route(Route::HexToOct),
        MenuAction::Float,
        MenuAction::Detect,
        MenuAction::ToggleTheme,
    ] {
        assert!(
            items.iter().any(|item| item.action == action),
            "menu is missing {:?}",
            action
        );
    }
}
