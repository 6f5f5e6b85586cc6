//! Application layer - Use cases and orchestration

pub mod entries;
pub mod export_document;
pub mod init;
pub mod manage_config;
pub mod week_overview;

pub use entries::{AppendOutcome, EntryService};
pub use export_document::{ExportOutcome, ExportService, ExportedDocument};
pub use manage_config::ConfigService;
pub use week_overview::{week_overview, WeekOverview};
