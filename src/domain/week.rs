//! Monday-start week arithmetic

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Monday of the week containing `date`
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday through Sunday of the week containing `date`
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = monday_of(date);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Monday through Friday of the week containing `date`
pub fn work_week(date: NaiveDate) -> WorkWeek {
    WorkWeek::containing(date)
}

/// The five working days of one calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkWeek {
    days: [NaiveDate; 5],
}

impl WorkWeek {
    pub fn containing(date: NaiveDate) -> Self {
        let week = week_dates(date);
        WorkWeek {
            days: [week[0], week[1], week[2], week[3], week[4]],
        }
    }

    pub fn days(&self) -> &[NaiveDate; 5] {
        &self.days
    }

    pub fn monday(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn friday(&self) -> NaiveDate {
        self.days[4]
    }

    pub fn previous(&self) -> Self {
        Self::containing(self.monday() - Duration::days(7))
    }

    pub fn next(&self) -> Self {
        Self::containing(self.monday() + Duration::days(7))
    }

    /// Pairs each work day with its weekday
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, NaiveDate)> + '_ {
        self.days.iter().map(|d| (d.weekday(), *d))
    }
}
