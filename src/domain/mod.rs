//! Domain layer - Entries, week arithmetic and report assembly

pub mod date_ref;
pub mod entry;
pub mod overview;
pub mod report;
pub mod week;

pub use date_ref::{resolve_date, DateReference};
pub use entry::{Entry, EntryCollection};
pub use report::{build_payload, ExportPayload};
pub use week::{monday_of, week_dates, work_week, WorkWeek};
