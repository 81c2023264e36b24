//! # Host capabilities
//!
//! The services never touch a UI toolkit directly. Everything that would be a
//! DOM update, a file download, a modal dialog, a clipboard write or a print
//! job goes through one of the traits below, so the domain logic runs the same
//! in a browser shell, a desktop shell or a test.
//!
//! - [`Renderer`]: replaces table bodies, KPI cards and output panels
//! - [`Downloader`]: delivers exported bytes as a named file
//! - [`Notifier`]: blocking alert / confirm / prompt dialogs
//! - [`Clipboard`]: text clipboard
//! - [`Printer`]: prints a small HTML document

use anyhow::Result;
use shared::{KpiSnapshot, Panel, TableView};

use crate::backend::domain::record_table::RenderedTable;

pub mod directory_downloader;
pub mod memory;

pub use directory_downloader::DirectoryDownloader;
pub use memory::{
    DownloadedFile, HeadlessHost, MemoryClipboard, MemoryDownloader, MemoryPrinter, MemoryRenderer,
    ScriptedNotifier,
};

/// Presentation surface for tables, KPI cards and output panels
pub trait Renderer {
    /// Replace the body of a table view
    fn render_table(&mut self, view: TableView, table: &RenderedTable);

    /// Update the KPI cards
    fn render_kpis(&mut self, kpis: &KpiSnapshot);

    /// Replace a panel with plain text
    fn render_text(&mut self, panel: Panel, text: &str);

    /// Replace a panel with pre-escaped HTML
    fn render_html(&mut self, panel: Panel, html: &str);
}

/// Delivers exported content to the user as a file
pub trait Downloader {
    fn download(&mut self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<()>;
}

/// Blocking user notifications
pub trait Notifier {
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; `true` means the user accepted
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text; `None` when the user cancels
    fn prompt(&mut self, message: &str, default_value: &str) -> Option<String>;
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub trait Printer {
    fn print_document(&mut self, html: &str) -> Result<()>;
}
