//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod converter;
pub mod document;
pub mod docx;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use converter::{FormatConverter, OfficeConverter};
pub use document::DocumentFormat;
pub use docx::{render_document, DocumentRenderer, DocxRenderer};
pub use store::{EntryStore, JsonFileStore, MemoryStore};
pub use workspace::Workspace;
