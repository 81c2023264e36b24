//! Export service domain logic.
//!
//! Two CSV paths exist and are intentionally kept apart:
//!
//! - [`to_csv`] joins cells from the stores as-is. Nothing is quoted, so a
//!   comma inside a value shifts the columns of that row.
//! - [`table_to_csv`] exports what a rendered table displays and strips every
//!   comma from each body cell before joining.
//!
//! Delivering the file is delegated to the host's [`Downloader`].

use anyhow::Result;
use log::{info, warn};
use shared::ExportFile;

use super::errors::DeskError;
use super::record_table::RenderedTable;
use super::values::Scalar;
use crate::backend::io::{Downloader, Notifier};

pub const CSV_MIME: &str = "text/csv";
pub const TEXT_MIME: &str = "text/plain";

pub const ERP_REPORT_FILENAME: &str = "erp_report.csv";
pub const ERP_SAMPLE_REPORT_FILENAME: &str = "erp_sample_report.csv";
pub const ERP_TABLE_EXPORT_FILENAME: &str = "erp_table_export.csv";
pub const SAMPLE_REPORT_FILENAME: &str = "sample_report.csv";
pub const PITCH_FILENAME: &str = "pitch.txt";

/// Join cells with `,` and rows with `\n`. No quoting, no trailing newline.
pub fn to_csv<I, R, S>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: Into<Scalar>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.into().to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove every comma from a displayed cell
pub fn strip_commas(cell: &str) -> String {
    cell.replace(',', "")
}

/// Header row plus displayed body cells, commas stripped from body cells
pub fn table_to_csv(table: &RenderedTable) -> String {
    let header = table.headers.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    let body = table
        .text_rows()
        .into_iter()
        .map(|row| row.iter().map(|cell| strip_commas(cell)).collect::<Vec<_>>());
    to_csv(std::iter::once(header).chain(body))
}

/// Export service that packages content and hands it to the host
#[derive(Debug, Clone, Default)]
pub struct ExportService {}

impl ExportService {
    pub fn new() -> Self {
        Self {}
    }

    /// Package CSV text whose first line is a header
    pub fn csv_file(&self, content: String, filename: &str) -> ExportFile {
        let row_count = content.lines().count().saturating_sub(1);
        ExportFile {
            content,
            filename: filename.to_string(),
            mime_type: CSV_MIME.to_string(),
            row_count,
        }
    }

    /// Package plain text
    pub fn text_file(&self, content: String, filename: &str) -> ExportFile {
        let row_count = content.lines().count();
        ExportFile {
            content,
            filename: filename.to_string(),
            mime_type: TEXT_MIME.to_string(),
            row_count,
        }
    }

    /// Hand the file to the host. Empty content is refused with a notification
    /// and produces no file; returns whether a download happened.
    pub fn trigger_download<H>(&self, file: &ExportFile, host: &mut H) -> Result<bool>
    where
        H: Downloader + Notifier + ?Sized,
    {
        if file.content.is_empty() {
            warn!("EXPORT: refusing to download empty {}", file.filename);
            host.alert(&DeskError::NothingToExport.to_string());
            return Ok(false);
        }

        host.download(file.content.as_bytes(), &file.filename, &file.mime_type)?;
        info!(
            "EXPORT: delivered {} ({} rows, {} bytes)",
            file.filename,
            file.row_count,
            file.content.len()
        );
        Ok(true)
    }
}
