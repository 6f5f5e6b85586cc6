//! Output formatting utilities

use crate::domain::overview::NO_ENTRY;
use crate::domain::WorkWeek;
use crate::infrastructure::Config;
use chrono::NaiveDate;

const RULE_WIDTH: usize = 60;

/// Format one day's entry for display
pub fn format_day(date: NaiveDate, text: Option<&str>) -> String {
    format!(
        "{}\nDaily report: {}\n{}\n{}\n{}",
        "=".repeat(RULE_WIDTH),
        date.format("%Y-%m-%d"),
        "-".repeat(RULE_WIDTH),
        text.unwrap_or(NO_ENTRY),
        "=".repeat(RULE_WIDTH)
    )
}

/// Format the existing text shown before adding to an entry
pub fn format_existing(text: &str) -> String {
    format!(
        "Existing entry:\n{}\n{}\n{}",
        "-".repeat(RULE_WIDTH),
        text,
        "-".repeat(RULE_WIDTH)
    )
}

/// Previous/next week hints
pub fn format_week_navigation(week: &WorkWeek) -> String {
    format!(
        "Previous week: {}  Next week: {}",
        week.previous().monday().format("%Y-%m-%d"),
        week.next().monday().format("%Y-%m-%d")
    )
}

/// Format the configuration listing
pub fn format_config(config: &Config) -> String {
    format!(
        "data_file = {}\ntemplate = {}\nreporter = {}\nconverter = {}",
        config.data_file.display(),
        config.template.display(),
        config.reporter.as_deref().unwrap_or(""),
        config.converter.as_deref().unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::work_week;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_day_with_entry() {
        let output = format_day(date(2024, 6, 3), Some("Worked on X"));
        assert!(output.contains("Daily report: 2024-06-03"));
        assert!(output.contains("\nWorked on X\n"));
        assert!(output.starts_with(&"=".repeat(60)));
    }

    #[test]
    fn test_format_day_without_entry() {
        let output = format_day(date(2024, 6, 3), None);
        assert!(output.contains("(no entry)"));
    }

    #[test]
    fn test_format_existing() {
        let output = format_existing("A\nB");
        assert!(output.starts_with("Existing entry:\n"));
        assert!(output.contains("\nA\nB\n"));
    }

    #[test]
    fn test_format_week_navigation() {
        let output = format_week_navigation(&work_week(date(2024, 6, 5)));
        assert_eq!(output, "Previous week: 2024-05-27  Next week: 2024-06-10");
    }

    #[test]
    fn test_format_config() {
        let config = Config {
            reporter: Some("Erika".to_string()),
            ..Config::default()
        };
        let output = format_config(&config);
        assert!(output.contains("data_file = data.json"));
        assert!(output.contains("template = Vorlage.docx"));
        assert!(output.contains("reporter = Erika"));
        assert!(output.ends_with("converter = "));
    }
}
