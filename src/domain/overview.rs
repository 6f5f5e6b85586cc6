//! Plain-text week overview for copying into the report book

use crate::domain::entry::EntryCollection;
use crate::domain::week::WorkWeek;

pub const NO_ENTRY: &str = "(no entry)";

const RULE_WIDTH: usize = 60;

/// Render the Monday-Friday overview of `week`
pub fn render_overview(entries: &EntryCollection, week: &WorkWeek) -> String {
    let mut lines = vec![
        "WEEKLY OVERVIEW (for the Ausbildungsnachweis)".to_string(),
        format!("Week starting Monday: {}", week.monday().format("%Y-%m-%d")),
        "=".repeat(RULE_WIDTH),
    ];

    for (_, day) in week.iter() {
        lines.push(format!("\n{} ({})", day.format("%A"), day.format("%Y-%m-%d")));
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(entries.get(day).unwrap_or(NO_ENTRY).to_string());
    }

    lines.join("\n")
}

/// File name used when saving the overview of `week`
pub fn overview_file_name(week: &WorkWeek) -> String {
    format!("wochenbericht_{}.txt", week.monday().format("%Y-%m-%d"))
}
