//! Error types for Medic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedicError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid knowledge base: {0}")]
    InvalidKnowledgeBase(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MedicError {
    /// Process exit code for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            MedicError::Io(_) => 1,
            MedicError::Toml(_) => 64,
            MedicError::InvalidKnowledgeBase(_) => 64,
            MedicError::InvalidConfig(_) => 64,
        }
    }
}

pub type Result<T> = std::result::Result<T, MedicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = MedicError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 1);
        assert_eq!(MedicError::InvalidKnowledgeBase("empty".into()).exit_code(), 64);
        assert_eq!(MedicError::InvalidConfig("bad".into()).exit_code(), 64);
    }

    #[test]
    fn test_display_messages() {
        let err = MedicError::InvalidKnowledgeBase("duplicate disease 'Flu'".into());
        assert_eq!(err.to_string(), "Invalid knowledge base: duplicate disease 'Flu'");
    }
}
