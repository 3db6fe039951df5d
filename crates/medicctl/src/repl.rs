//! REPL - interactive symptom queries
//!
//! Reads one comma-separated line per query until an exit word or EOF.

use crate::commands::{self, App};
use anyhow::Result;
use medic_common::display;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Read failures in a row before the session is closed
pub const MAX_CONSECUTIVE_READ_ERRORS: usize = 3;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    Symptoms,
    Query(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "exit" | "quit" | "q" => ReplCommand::Exit,
            "help" | "?" => ReplCommand::Help,
            "symptoms" | "list" => ReplCommand::Symptoms,
            _ => ReplCommand::Query(trimmed.to_string()),
        }
    }
}

/// Run the loop over any line source
pub fn run_repl<R: BufRead, W: Write>(app: &App, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", display::banner(&app.theme))?;
    writeln!(out, "{}\n", display::interactive_help(&app.theme))?;

    let mut lines = input.lines();
    let mut read_errors = 0;

    loop {
        write!(out, "{}", display::prompt(&app.theme))?;
        out.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => {
                read_errors = 0;
                line
            }
            Some(Err(e)) => {
                read_errors += 1;
                warn!("Error reading input ({} in a row): {}", read_errors, e);
                writeln!(out, "[ERROR] Error reading input: {}", e)?;
                if read_errors >= MAX_CONSECUTIVE_READ_ERRORS {
                    warn!("Input keeps failing, ending session");
                    break;
                }
                continue;
            }
            None => {
                // EOF
                writeln!(out)?;
                break;
            }
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Exit => break,
            ReplCommand::Help => writeln!(out, "{}", display::interactive_help(&app.theme))?,
            ReplCommand::Symptoms => commands::symptoms(app, out)?,
            ReplCommand::Query(text) => {
                debug!("Query: {:?}", text);
                let diagnosis = app.diagnose(&text);
                writeln!(out, "{}", display::diagnosis(&app.theme, &diagnosis))?;
            }
        }
    }

    writeln!(out, "{}", display::goodbye(&app.theme))?;
    Ok(())
}
