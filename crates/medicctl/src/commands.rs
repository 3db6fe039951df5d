//! Command implementations for medicctl
//!
//! Every command writes to a caller-supplied writer so the same code serves
//! stdout and tests.

use anyhow::{Context, Result};
use medic_common::demo::demo_queries;
use medic_common::display::{self, Theme};
use medic_common::{Diagnosis, KnowledgeBase, MedicConfig, SymptomQuery};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Everything a command needs: the knowledge base and output settings
pub struct App {
    pub kb: KnowledgeBase,
    pub theme: Theme,
    pub max_results: usize,
}

impl App {
    pub fn new(kb: KnowledgeBase, theme: Theme, max_results: usize) -> Self {
        Self {
            kb,
            theme,
            max_results,
        }
    }

    /// Build from configuration; `kb_override` wins over the configured path
    pub fn from_config(config: &MedicConfig, kb_override: Option<&Path>) -> Result<Self> {
        let kb_path = kb_override.or(config.knowledge.path.as_deref());

        let kb = match kb_path {
            Some(path) => KnowledgeBase::load_from(path)
                .with_context(|| format!("Failed to load knowledge base {}", path.display()))?,
            None => {
                info!("Using built-in knowledge base");
                KnowledgeBase::builtin()
            }
        };

        Ok(Self::new(
            kb,
            Theme::from_mode(config.output.color),
            config.output.max_results,
        ))
    }

    /// Parse free text and run it
    pub fn diagnose(&self, input: &str) -> Diagnosis<'_> {
        Diagnosis::run(&self.kb, SymptomQuery::parse(input), self.max_results)
    }
}

/// One-shot diagnosis; arguments are joined as one comma-separated query
pub fn check<W: Write>(app: &App, symptoms: &[String], json: bool, out: &mut W) -> Result<()> {
    let diagnosis = app.diagnose(&symptoms.join(","));

    if json {
        let rendered =
            display::diagnosis_json(&diagnosis).context("Failed to serialize diagnosis")?;
        writeln!(out, "{}", rendered)?;
    } else {
        writeln!(out, "{}", display::diagnosis(&app.theme, &diagnosis))?;
    }
    Ok(())
}

/// Scripted demo
pub fn demo<W: Write>(app: &App, out: &mut W) -> Result<()> {
    writeln!(out, "{}", display::banner(&app.theme))?;

    for (label, query) in demo_queries() {
        writeln!(out, "\n{}", display::demo_heading(&app.theme, &label))?;
        let diagnosis = Diagnosis::run(&app.kb, query, app.max_results);
        writeln!(out, "{}", display::diagnosis(&app.theme, &diagnosis))?;
    }
    Ok(())
}

/// Known symptom list
pub fn symptoms<W: Write>(app: &App, out: &mut W) -> Result<()> {
    writeln!(out, "{}", display::vocabulary(&app.theme, &app.kb))?;
    Ok(())
}

/// Closing notice
pub fn disclaimer<W: Write>(app: &App, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}\n", display::disclaimer(&app.theme))?;
    Ok(())
}
