//! Week overview use case

use crate::application::EntryService;
use crate::domain::overview::{overview_file_name, render_overview};
use crate::domain::WorkWeek;
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Rendered overview of one work week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekOverview {
    pub week: WorkWeek,
    pub text: String,
}

impl WeekOverview {
    /// Write the overview as a text file into `dir`
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(overview_file_name(&self.week));
        fs::write(&path, &self.text)?;
        Ok(path)
    }
}

/// Overview of the work week containing `date`
pub fn week_overview<S: EntryStore>(
    service: &mut EntryService<S>,
    date: NaiveDate,
) -> Result<WeekOverview> {
    let (week, entries) = service.week(date)?;
    Ok(WeekOverview {
        week,
        text: render_overview(&entries, &week),
    })
}
