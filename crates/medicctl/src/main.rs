//! Medic Control - CLI for the Medic symptom checker
//!
//! With no subcommand: list symptoms, then run interactively on a terminal
//! or the scripted demo otherwise.

use anyhow::Result;
use clap::Parser;
use medicctl::cli::{Cli, Commands};
use medicctl::commands::{self, App};
use medicctl::{errors, logging, repl};
use medic_common::MedicConfig;
use std::io::{self, Write};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(errors::exit_code_for(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = MedicConfig::load(cli.config.as_deref())?;
    if let Some(color) = cli.color {
        config.output.color = color;
    }
    if let Some(max_results) = cli.max_results {
        config.output.max_results = max_results;
    }
    debug!("Effective config: {:?}", config);

    let app = App::from_config(&config, cli.knowledge_base.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Interactive) => repl::run_repl(&app, io::stdin().lock(), &mut out)?,
        Some(Commands::Demo) => commands::demo(&app, &mut out)?,
        Some(Commands::Check { symptoms, json }) => {
            commands::check(&app, &symptoms, json, &mut out)?
        }
        Some(Commands::Symptoms) => commands::symptoms(&app, &mut out)?,
        None => {
            commands::symptoms(&app, &mut out)?;
            if atty::is(atty::Stream::Stdin) {
                repl::run_repl(&app, io::stdin().lock(), &mut out)?;
            } else {
                commands::demo(&app, &mut out)?;
            }
            commands::disclaimer(&app, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
