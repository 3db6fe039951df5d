//! Medic Common - knowledge base, matching and presentation for Medic
//!
//! Control flow: symptoms -> matcher -> ranker -> display.
//! The knowledge base is built once and passed by reference; nothing here
//! holds global state.

pub mod config;
pub mod demo;
pub mod diagnosis;
pub mod display;
pub mod error;
pub mod knowledge_base;
pub mod matcher;
pub mod ranker;
pub mod symptom;

pub use config::{ColorMode, MedicConfig};
pub use diagnosis::Diagnosis;
pub use error::{MedicError, Result};
pub use knowledge_base::{DiseaseRecord, KnowledgeBase};
pub use matcher::{match_symptoms, MatchResult};
pub use ranker::rank;
pub use symptom::SymptomQuery;
