//! Error types for berichtsheft

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for berichtsheft
#[derive(Debug, Error)]
pub enum BerichtsheftError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry store {} is corrupt: {reason}", path.display())]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("Template not found: {0}")]
    TemplateMissing(PathBuf),

    #[error("Template engine unavailable: {0}")]
    TemplateEngineUnavailable(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("No text given for {0}")]
    EmptyEntry(NaiveDate),

    #[error("Reporter name is required for export")]
    MissingReporterName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document package error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BerichtsheftError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BerichtsheftError::InvalidDate(_) => 3,
            BerichtsheftError::StorageCorrupt { .. } => 4,
            BerichtsheftError::TemplateMissing(_) => 5,
            BerichtsheftError::TemplateEngineUnavailable(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BerichtsheftError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • YYYY-MM-DD (e.g., 2024-06-03)\n\
                    • today, heute\n\n\
                    Examples:\n\
                    berichtsheft show today\n\
                    berichtsheft week 2024-06-05",
                    input
                )
            }
            BerichtsheftError::TemplateMissing(path) => {
                format!(
                    "Template not found: {}\n\n\
                    Suggestions:\n\
                    • Place Vorlage.docx in the berichtsheft directory\n\
                    • Point to another template: berichtsheft config template 'path/to/template.docx'",
                    path.display()
                )
            }
            BerichtsheftError::TemplateEngineUnavailable(msg) => {
                format!(
                    "Template engine unavailable: {}\n\n\
                    Only .docx templates can be rendered.",
                    msg
                )
            }
            BerichtsheftError::EmptyEntry(date) => {
                format!(
                    "No text given for {}\n\n\
                    Suggestions:\n\
                    • Pass the entry text: berichtsheft set {} 'Worked on X'\n\
                    • Remove the entry instead: berichtsheft delete {}",
                    date, date, date
                )
            }
            BerichtsheftError::MissingReporterName => "Reporter name is required for export\n\n\
                Suggestions:\n\
                • Pass it directly: berichtsheft export --name 'Erika Mustermann'\n\
                • Store a default: berichtsheft config reporter 'Erika Mustermann'"
                .to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type using BerichtsheftError
pub type Result<T> = std::result::Result<T, BerichtsheftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_examples() {
        let err = BerichtsheftError::InvalidDate("03.06.2024".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("heute"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_template_missing_suggestions() {
        let err = BerichtsheftError::TemplateMissing(PathBuf::from("/tmp/Vorlage.docx"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/Vorlage.docx"));
        assert!(msg.contains("berichtsheft config template"));
    }

    #[test]
    fn test_empty_entry_suggests_delete() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let msg = BerichtsheftError::EmptyEntry(date).display_with_suggestions();
        assert!(msg.contains("berichtsheft delete 2024-06-03"));
    }

    #[test]
    fn test_missing_reporter_suggestions() {
        let msg = BerichtsheftError::MissingReporterName.display_with_suggestions();
        assert!(msg.contains("--name"));
        assert!(msg.contains("config reporter"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(BerichtsheftError::InvalidDate("x".into()).exit_code(), 3);
        let corrupt = BerichtsheftError::StorageCorrupt {
            path: PathBuf::from("data.json"),
            reason: "expected value".into(),
        };
        assert_eq!(corrupt.exit_code(), 4);
        assert_eq!(
            BerichtsheftError::TemplateMissing(PathBuf::from("x")).exit_code(),
            5
        );
        assert_eq!(
            BerichtsheftError::TemplateEngineUnavailable("odt".into()).exit_code(),
            6
        );
        assert_eq!(BerichtsheftError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = BerichtsheftError::Template("missing word/document.xml".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Template error: missing word/document.xml");
    }
}
