//! numbase: Number Base Converter CLI
//!
//! One-shot conversions via subcommands, or an interactive menu when run
//! without one.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use numbase::cli::{execute, run_menu, Cli};
use numbase::report::{outcome_json, print_outcome};
use numbase::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings();
    debug!(?settings, "starting numbase");

    let Some(command) = &cli.command else {
        info!("no subcommand given, starting interactive menu");
        return run_menu(settings);
    };

    let outcome = execute(command, settings.show_steps)?;
    if settings.json {
        println!("{}", outcome_json(&outcome)?);
    } else {
        print_outcome(&outcome, settings.theme);
    }
    Ok(())
}
