//! Interactive terminal menu

use crate::application::{week_overview, AppendOutcome, EntryService};
use crate::cli::output::{format_day, format_existing};
use crate::domain::DateReference;
use crate::error::{BerichtsheftError, Result};
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const DATE_PROMPT: &str = "Date (YYYY-MM-DD or 'today'): ";

/// Menu loop over any line-based input and output
pub struct Menu<'a, S: EntryStore, R: BufRead, W: Write> {
    service: &'a mut EntryService<S>,
    input: R,
    output: W,
    save_dir: PathBuf,
    today: NaiveDate,
}

impl<'a, S: EntryStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    /// `save_dir` receives week overview text files
    pub fn new(
        service: &'a mut EntryService<S>,
        input: R,
        output: W,
        save_dir: PathBuf,
        today: NaiveDate,
    ) -> Self {
        Menu {
            service,
            input,
            output,
            save_dir,
            today,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "=== Berichtsheft ===")?;
            writeln!(self.output, "1) Add/edit daily report")?;
            writeln!(self.output, "2) Show daily report")?;
            writeln!(self.output, "3) Print week (Mon-Fri)")?;
            writeln!(self.output, "4) Quit")?;

            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };

            let result = match choice.trim() {
                "1" => self.add_entry(),
                "2" => self.show_day(),
                "3" => self.export_week(),
                "4" => break,
                _ => {
                    writeln!(self.output, "Invalid. Please choose 1-4.\n")?;
                    Ok(())
                }
            };

            self.flush_warnings()?;

            match result {
                Err(BerichtsheftError::InvalidDate(input)) => {
                    writeln!(
                        self.output,
                        "Invalid date '{}'. Please use YYYY-MM-DD.\n",
                        input
                    )?;
                }
                other => other?,
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn add_entry(&mut self) -> Result<()> {
        let Some(date) = self.prompt_date(DATE_PROMPT)? else {
            return Ok(());
        };

        if let Some(existing) = self.service.entry(date)? {
            if !existing.trim().is_empty() {
                writeln!(self.output, "{}", format_existing(existing.trim()))?;
            }
        }

        writeln!(self.output, "Write your daily report. Empty line = done.")?;
        let mut lines = Vec::new();
        while let Some(line) = self.prompt("> ")? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }

        match self.service.append_entry(date, &lines.join("\n"))? {
            AppendOutcome::Skipped => writeln!(self.output, "No text entered - cancelled.")?,
            _ => writeln!(self.output, "Saved for {}", date)?,
        }
        Ok(())
    }

    fn show_day(&mut self) -> Result<()> {
        let Some(date) = self.prompt_date(DATE_PROMPT)? else {
            return Ok(());
        };
        let text = self.service.entry(date)?;
        writeln!(self.output, "\n{}\n", format_day(date, text.as_deref()))?;
        Ok(())
    }

    fn export_week(&mut self) -> Result<()> {
        let Some(date) = self.prompt_date("Any date in the week (YYYY-MM-DD or 'today'): ")? else {
            return Ok(());
        };

        let overview = week_overview(&mut *self.service, date)?;
        writeln!(self.output, "\n{}\n", overview.text)?;

        let answer = self.prompt("Save as text file? (j/n): ")?.unwrap_or_default();
        if matches!(answer.trim().to_lowercase().as_str(), "j" | "y") {
            let path = overview.save_to(&self.save_dir)?;
            writeln!(self.output, "Saved as {}", path.display())?;
        }
        Ok(())
    }

    fn prompt_date(&mut self, prompt: &str) -> Result<Option<NaiveDate>> {
        match self.prompt(prompt)? {
            Some(raw) => Ok(Some(DateReference::parse(&raw)?.resolve(self.today))),
            None => Ok(None),
        }
    }

    /// Print `prompt` and read one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn flush_warnings(&mut self) -> Result<()> {
        for warning in self.service.take_warnings() {
            writeln!(self.output, "{}", warning)?;
        }
        Ok(())
    }
}
