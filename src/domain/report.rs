//! Export payload assembly for one work week

use crate::domain::entry::EntryCollection;
use crate::domain::week::WorkWeek;
use chrono::{Datelike, NaiveDate};

/// Template field names, in the order they are emitted
pub const FIELD_NAME: &str = "NAME";
pub const FIELD_YEAR: &str = "JAHR";
pub const FIELD_WEEK_START: &str = "DAT_STA";
pub const FIELD_WEEK_END: &str = "DAT_END";
pub const FIELD_TODAY: &str = "DAT_HEUTE";
pub const WEEKDAY_FIELDS: [&str; 5] = [
    "MO_TAETIGKEITEN",
    "DI_TAETIGKEITEN",
    "MI_TAETIGKEITEN",
    "DO_TAETIGKEITEN",
    "FR_TAETIGKEITEN",
];

/// Everything a report template needs for one week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub reporter_name: String,
    pub year: i32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub weekday_texts: [String; 5],
    pub rendered_on: NaiveDate,
}

impl ExportPayload {
    /// Named template fields with their rendered values
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (FIELD_NAME, self.reporter_name.clone()),
            (FIELD_YEAR, self.year.to_string()),
            (FIELD_WEEK_START, self.week_start.format("%Y-%m-%d").to_string()),
            (FIELD_WEEK_END, self.week_end.format("%Y-%m-%d").to_string()),
        ];
        for (name, text) in WEEKDAY_FIELDS.iter().zip(self.weekday_texts.iter()) {
            fields.push((name, text.clone()));
        }
        fields.push((FIELD_TODAY, self.rendered_on.format("%Y-%m-%d").to_string()));
        fields
    }

    /// Value of a single field by name
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

/// Build the payload for `week`. Missing entries become empty text.
pub fn build_payload(
    entries: &EntryCollection,
    week: &WorkWeek,
    reporter_name: &str,
    today: NaiveDate,
) -> ExportPayload {
    let days = week.days();
    ExportPayload {
        reporter_name: reporter_name.to_string(),
        year: week.monday().year(),
        week_start: week.monday(),
        week_end: week.friday(),
        weekday_texts: std::array::from_fn(|i| {
            normalize_line_endings(entries.text_or_empty(days[i]))
        }),
        rendered_on: today,
    }
}

/// Convert CRLF and lone CR line endings to LF
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
