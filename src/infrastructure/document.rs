//! Output document formats

use std::fmt;
use std::str::FromStr;

/// Formats an export can be delivered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Word-processing document rendered straight from the template
    Docx,
    /// Page-fixed document produced by the external converter
    Pdf,
    /// OpenDocument text produced by the external converter
    Odt,
}

impl DocumentFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Odt => "odt",
        }
    }

    /// Export file name for the week starting at `monday`
    pub fn file_name(&self, monday: chrono::NaiveDate) -> String {
        format!(
            "ausbildungsnachweis_{}.{}",
            monday.format("%Y-%m-%d"),
            self.extension()
        )
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            "odt" => Ok(DocumentFormat::Odt),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: pdf, odt, docx",
                s
            )),
        }
    }
}
