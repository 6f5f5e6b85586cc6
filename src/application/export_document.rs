//! Export a work week into a report document

use crate::domain::{build_payload, EntryCollection, WorkWeek};
use crate::error::{BerichtsheftError, Result};
use crate::infrastructure::{render_document, DocumentFormat, FormatConverter};
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// How the delivered document came about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The requested secondary format was produced
    Converted,
    /// Conversion failed; the primary document is delivered instead
    ConversionUnavailable { requested: DocumentFormat },
    /// Only the primary document was asked for
    PrimaryOnly,
}

/// A finished export, ready to be written or served
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
    pub outcome: ExportOutcome,
    pub week: WorkWeek,
}

impl ExportedDocument {
    pub fn file_name(&self) -> String {
        self.format.file_name(self.week.monday())
    }

    /// User-facing note when the export fell back to the primary format
    pub fn notice(&self) -> Option<String> {
        match self.outcome {
            ExportOutcome::ConversionUnavailable { requested } => Some(format!(
                "{} conversion failed. Providing {} instead.",
                requested, self.format
            )),
            _ => None,
        }
    }

    /// Write into `dir` under the export file name
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(self.file_name());
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Renders the template and optionally converts the result
pub struct ExportService<C: FormatConverter> {
    template: PathBuf,
    converter: C,
}

impl<C: FormatConverter> ExportService<C> {
    pub fn new(template: PathBuf, converter: C) -> Self {
        ExportService {
            template,
            converter,
        }
    }

    /// Export `week`. `target` is the secondary format to attempt; a
    /// failed conversion falls back to the rendered DOCX.
    pub fn export(
        &self,
        entries: &EntryCollection,
        week: &WorkWeek,
        reporter_name: &str,
        today: NaiveDate,
        target: Option<DocumentFormat>,
    ) -> Result<ExportedDocument> {
        let reporter_name = reporter_name.trim();
        if reporter_name.is_empty() {
            return Err(BerichtsheftError::MissingReporterName);
        }

        let payload = build_payload(entries, week, reporter_name, today);
        let docx = render_document(&self.template, &payload)?;
        info!(
            "rendered report for week of {} ({} bytes)",
            week.monday(),
            docx.len()
        );

        let target = target.filter(|format| *format != DocumentFormat::Docx);
        let Some(target) = target else {
            return Ok(ExportedDocument {
                format: DocumentFormat::Docx,
                bytes: docx,
                outcome: ExportOutcome::PrimaryOnly,
                week: *week,
            });
        };

        match self
            .converter
            .try_convert(&docx, DocumentFormat::Docx, target)
        {
            Some(bytes) => Ok(ExportedDocument {
                format: target,
                bytes,
                outcome: ExportOutcome::Converted,
                week: *week,
            }),
            None => Ok(ExportedDocument {
                format: DocumentFormat::Docx,
                bytes: docx,
                outcome: ExportOutcome::ConversionUnavailable { requested: target },
                week: *week,
            }),
        }
    }
}
