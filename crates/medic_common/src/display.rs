//! Display Library - presenter for diagnoses
//!
//! Every renderer returns a `String` so callers decide where it goes and
//! tests can compare plain text with color forced off.

use crate::config::ColorMode;
use crate::diagnosis::Diagnosis;
use crate::knowledge_base::KnowledgeBase;
use crate::matcher::MatchResult;
use owo_colors::{OwoColorize, Style};

/// Shown when nothing matched
pub const NO_MATCH_MESSAGE: &str = "No matching condition found.";

/// Extra hint when the query had no usable symptoms
pub const NO_SYMPTOMS_MESSAGE: &str = "No symptoms entered.";

/// Prompt for interactive mode
pub const PROMPT: &str = "Symptoms> ";

const SEPARATOR: &str = "--------------------------------";
const NAME_WIDTH: usize = 20;

/// Color policy for `auto` mode: no `NO_COLOR`, a real `TERM`, and a terminal
pub fn color_allowed(no_color: bool, term: Option<&str>, is_tty: bool) -> bool {
    if no_color {
        return false;
    }

    // Dumb or missing terminal
    match term {
        Some(term) if !term.is_empty() && term != "dumb" => is_tty,
        _ => false,
    }
}

/// Check if color output should be used on stdout
pub fn should_use_color() -> bool {
    let term = std::env::var("TERM").ok();
    color_allowed(
        std::env::var_os("NO_COLOR").is_some(),
        term.as_deref(),
        atty::is(atty::Stream::Stdout),
    )
}

/// Rendering style: colored or plain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub use_color: bool,
}

impl Theme {
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    pub fn colored() -> Self {
        Self { use_color: true }
    }

    /// Resolve a configured mode against the current terminal
    pub fn from_mode(mode: ColorMode) -> Self {
        let use_color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => should_use_color(),
        };
        Self { use_color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Program banner
pub fn banner(theme: &Theme) -> String {
    format!(
        "\n{}\n{}\n",
        theme.paint("MEDIC SYMPTOM CHECKER", Style::new().bold().blue()),
        theme.paint("Rule-based diagnosis suggestions", Style::new().dimmed().cyan()),
    )
}

/// Sorted, comma-joined list of known symptoms
pub fn vocabulary(theme: &Theme, kb: &KnowledgeBase) -> String {
    let symptoms: Vec<&str> = kb.vocabulary().into_iter().collect();
    format!(
        "{}\n{}",
        theme.paint("Available symptoms:", Style::new().bold().cyan()),
        symptoms.join(", ")
    )
}

/// Usage line for interactive mode
pub fn interactive_help(theme: &Theme) -> String {
    theme.paint(
        "Enter symptoms separated by commas. 'symptoms' lists them, 'exit' quits.",
        Style::new().cyan(),
    )
}

/// Heading printed before each demo query
pub fn demo_heading(theme: &Theme, label: &str) -> String {
    theme.paint(&format!("Demo: {}", label), Style::new().bold())
}

/// Farewell for interactive mode
pub fn goodbye(theme: &Theme) -> String {
    theme.paint("Goodbye!", Style::new().dimmed())
}

/// Interactive prompt
pub fn prompt(theme: &Theme) -> String {
    theme.paint(PROMPT, Style::new().blue())
}

/// One ranked row: name, score, specialist
pub fn match_row(theme: &Theme, result: &MatchResult<'_>) -> String {
    let name = format!("{:<width$}", result.disease.name, width = NAME_WIDTH);
    let plural = if result.score == 1 { "" } else { "es" };
    format!(
        "{} ({} match{})  ->  {}",
        theme.paint(&name, Style::new().green()),
        result.score,
        plural,
        result.disease.specialist
    )
}

/// Full diagnosis block
pub fn diagnosis(theme: &Theme, diagnosis: &Diagnosis<'_>) -> String {
    let mut lines = Vec::new();

    if diagnosis.is_empty() {
        if diagnosis.query.is_empty() {
            lines.push(theme.paint(NO_SYMPTOMS_MESSAGE, Style::new().yellow()));
        }
        lines.push(theme.paint(NO_MATCH_MESSAGE, Style::new().red()));
    } else {
        lines.push(String::new());
        lines.push(theme.paint("Likely diagnoses:", Style::new().bold().magenta()));
        lines.push(theme.paint(SEPARATOR, Style::new().dimmed()));
        for result in &diagnosis.results {
            lines.push(match_row(theme, result));
        }
    }

    if !diagnosis.unrecognized.is_empty() {
        lines.push(theme.paint(
            &format!("Not recognized: {}", diagnosis.unrecognized.join(", ")),
            Style::new().dimmed(),
        ));
    }

    lines.join("\n")
}

/// Diagnosis as pretty JSON
pub fn diagnosis_json(diagnosis: &Diagnosis<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diagnosis)
}

/// Closing notice
pub fn disclaimer(theme: &Theme) -> String {
    [
        theme.paint("[NOTE] This is a rule-based suggestion only.", Style::new().yellow()),
        "Please consult a certified doctor in real life.".to_string(),
        "Thank you for using the system. Stay healthy!".to_string(),
    ]
    .join("\n")
}
