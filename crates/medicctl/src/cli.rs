//! Command-line surface for medicctl

use clap::{ArgAction, Parser, Subcommand};
use medic_common::ColorMode;
use std::path::PathBuf;

// Version is embedded at build time
const VERSION: &str = env!("MEDIC_VERSION");

#[derive(Parser, Debug)]
#[command(name = "medicctl")]
#[command(about = "Medic - rule-based symptom checker", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Color output: auto, always or never
    #[arg(long, global = true, value_name = "MODE")]
    pub color: Option<ColorMode>,

    /// Diagnoses shown per query (0 = all)
    #[arg(long, global = true, value_name = "N")]
    pub max_results: Option<usize>,

    /// Disease table (TOML) replacing the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub knowledge_base: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Ask for symptoms in a loop
    Interactive,

    /// Run the scripted demo queries
    Demo,

    /// Diagnose one set of symptoms
    Check {
        /// Symptoms, separated by commas or given as separate arguments
        #[arg(required = true)]
        symptoms: Vec<String>,

        /// Print the diagnosis as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every known symptom
    Symptoms,
}
