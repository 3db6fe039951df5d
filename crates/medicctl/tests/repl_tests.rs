//! Interactive loop and command output, driven through the library with
//! in-memory input and plain-text output

use medic_common::display::{Theme, NO_MATCH_MESSAGE, NO_SYMPTOMS_MESSAGE};
use medic_common::{DiseaseRecord, KnowledgeBase, MedicConfig};
use medicctl::commands::{self, App};
use medicctl::repl::{run_repl, MAX_CONSECUTIVE_READ_ERRORS};
use std::io::{self, BufRead, Cursor, ErrorKind, Read, Write};

fn builtin_app() -> App {
    App::new(KnowledgeBase::builtin(), Theme::plain(), 3)
}

fn run(app: &App, input: &str) -> String {
    let mut out = Vec::new();
    run_repl(app, Cursor::new(input.as_bytes().to_vec()), &mut out).expect("repl runs");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn repl_diagnoses_then_exits() {
    let output = run(&builtin_app(), "Fever, Cough\nexit\nfever\n");

    assert!(output.contains("Likely diagnoses:"));
    assert!(output.contains("Flu"));
    assert!(output.contains("General Physician"));
    assert!(output.trim_end().ends_with("Goodbye!"));
    // Nothing after exit is processed
    assert_eq!(output.matches("Likely diagnoses:").count(), 1);
}

#[test]
fn repl_stops_at_eof() {
    let output = run(&builtin_app(), "red eyes, itchy eyes\n");
    assert!(output.contains("Conjunctivitis"));
    assert!(output.contains("Ophthalmologist"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn repl_blank_line_reports_no_match() {
    let output = run(&builtin_app(), "\nquit\n");
    assert!(output.contains(NO_SYMPTOMS_MESSAGE));
    assert!(output.contains(NO_MATCH_MESSAGE));
}

#[test]
fn repl_unknown_symptom_reports_no_match() {
    let output = run(&builtin_app(), "silver tongue\nq\n");
    assert!(output.contains(NO_MATCH_MESSAGE));
    assert!(output.contains("Not recognized: silver_tongue"));
}

/// Line source whose first `failures` reads fail before the text is served
struct FlakyInput {
    failures: usize,
    inner: Cursor<Vec<u8>>,
}

impl FlakyInput {
    fn new(failures: usize, text: &str) -> Self {
        Self {
            failures,
            inner: Cursor::new(text.as_bytes().to_vec()),
        }
    }
}

impl Read for FlakyInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for FlakyInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(io::Error::new(ErrorKind::Other, "device hiccup"));
        }
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

#[test]
fn repl_continues_after_read_error() {
    let mut out = Vec::new();
    run_repl(
        &builtin_app(),
        FlakyInput::new(1, "fever, cough\nexit\n"),
        &mut out,
    )
    .expect("a single read error does not end the session");

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("[ERROR] Error reading input: device hiccup"));
    assert!(output.contains("Flu"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn repl_gives_up_on_persistent_read_errors() {
    let mut out = Vec::new();
    run_repl(&builtin_app(), FlakyInput::new(usize::MAX, ""), &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output.matches("[ERROR] Error reading input").count(),
        MAX_CONSECUTIVE_READ_ERRORS
    );
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn repl_skips_invalid_utf8_line() {
    let mut input = b"\xff\xfe\n".to_vec();
    input.extend_from_slice(b"fever, cough\nexit\n");

    let mut out = Vec::new();
    run_repl(&builtin_app(), Cursor::new(input), &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("[ERROR] Error reading input"));
    assert!(output.contains("Flu"));
}

#[test]
fn repl_lists_symptoms() {
    let output = run(&builtin_app(), "symptoms\nexit\n");
    assert!(output.contains("Available symptoms:"));
    assert!(output.contains("abdominal_pain"));
}

#[test]
fn repl_is_idempotent() {
    let app = builtin_app();
    let first = run(&app, "fever, cough\n");
    let second = run(&app, "fever, cough\n");
    assert_eq!(first, second);
}

#[test]
fn check_joins_arguments() {
    let app = builtin_app();
    let mut out = Vec::new();
    let args = vec!["headache".to_string(), "blurred vision".to_string()];
    commands::check(&app, &args, false, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Migraine"));
    assert!(text.contains("Hypertension"));
    assert!(text.contains("(2 matches)"));
}

#[test]
fn check_json_output() {
    let app = builtin_app();
    let mut out = Vec::new();
    commands::check(&app, &["fever,cough".to_string()], true, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["results"][0]["disease"]["name"], "Flu");
    assert_eq!(value["results"][0]["score"], 2);
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
}

#[test]
fn demo_runs_every_query() {
    let app = builtin_app();
    let mut out = Vec::new();
    commands::demo(&app, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Demo: ").count(), 7);
    assert!(!text.contains(NO_MATCH_MESSAGE));
    assert!(text.contains("Tuberculosis"));
}

#[test]
fn app_loads_knowledge_base_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[[diseases]]\nname = \"Sunburn\"\nspecialist = \"Dermatologist\"\nsymptoms = [\"red skin\", \"peeling\"]"
    )
    .unwrap();

    let config = MedicConfig::default();
    let app = App::from_config(&config, Some(file.path())).unwrap();
    assert_eq!(app.kb.len(), 1);

    let diagnosis = app.diagnose("Red Skin");
    assert_eq!(diagnosis.results[0].disease.name, "Sunburn");
    assert_eq!(diagnosis.results[0].disease.specialist, "Dermatologist");
}

#[test]
fn app_rejects_invalid_knowledge_base() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[[diseases]]\nname = \"Empty\"\nsymptoms = []").unwrap();

    let err = App::from_config(&MedicConfig::default(), Some(file.path()))
        .err()
        .expect("invalid knowledge base");
    assert_eq!(medicctl::errors::exit_code_for(&err), medicctl::errors::EXIT_USAGE_ERROR);
}

#[test]
fn unlimited_results() {
    let kb = KnowledgeBase::from_records(vec![
        DiseaseRecord::new("A", ["x"], "One"),
        DiseaseRecord::new("B", ["x"], "Two"),
        DiseaseRecord::new("C", ["x"], "Three"),
        DiseaseRecord::new("D", ["x"], "Four"),
    ])
    .unwrap();
    let app = App::new(kb, Theme::plain(), 0);
    assert_eq!(app.diagnose("x").results.len(), 4);
}
