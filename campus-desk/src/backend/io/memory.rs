//! In-memory host capabilities.
//!
//! Used by the headless runner and by tests: every rendered table, panel,
//! download, dialog, clipboard write and print job is recorded so it can be
//! inspected afterwards.

use anyhow::Result;
use log::{debug, info};
use shared::{KpiSnapshot, Panel, TableView};
use std::collections::{HashMap, VecDeque};

use super::{Clipboard, Downloader, Notifier, Printer, Renderer};
use crate::backend::domain::record_table::RenderedTable;

/// Keeps the latest content of every view
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    tables: HashMap<TableView, RenderedTable>,
    kpis: Option<KpiSnapshot>,
    panels: HashMap<Panel, String>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, view: TableView) -> Option<&RenderedTable> {
        self.tables.get(&view)
    }

    pub fn kpis(&self) -> Option<&KpiSnapshot> {
        self.kpis.as_ref()
    }

    /// Latest text or HTML written to a panel
    pub fn panel(&self, panel: Panel) -> Option<&str> {
        self.panels.get(&panel).map(String::as_str)
    }
}

impl Renderer for MemoryRenderer {
    fn render_table(&mut self, view: TableView, table: &RenderedTable) {
        debug!("Rendering {:?} table with {} rows", view, table.rows.len());
        self.tables.insert(view, table.clone());
    }

    fn render_kpis(&mut self, kpis: &KpiSnapshot) {
        self.kpis = Some(kpis.clone());
    }

    fn render_text(&mut self, panel: Panel, text: &str) {
        self.panels.insert(panel, text.to_string());
    }

    fn render_html(&mut self, panel: Panel, html: &str) {
        self.panels.insert(panel, html.to_string());
    }
}

/// A file handed to [`MemoryDownloader`]
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DownloadedFile {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDownloader {
    files: Vec<DownloadedFile>,
}

impl MemoryDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[DownloadedFile] {
        &self.files
    }

    pub fn last(&self) -> Option<&DownloadedFile> {
        self.files.last()
    }
}

impl Downloader for MemoryDownloader {
    fn download(&mut self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<()> {
        self.files.push(DownloadedFile {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

/// Notifier with pre-scripted answers.
///
/// Alerts are logged and recorded. `confirm` returns the configured answer.
/// `prompt` pops the next scripted answer, falling back to accepting the
/// default value once the script is exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedNotifier {
    alerts: Vec<String>,
    confirm_answer: bool,
    prompt_answers: VecDeque<Option<String>>,
}

impl ScriptedNotifier {
    pub fn new() -> Self {
        Self {
            alerts: Vec::new(),
            confirm_answer: true,
            prompt_answers: VecDeque::new(),
        }
    }

    pub fn set_confirm_answer(&mut self, answer: bool) {
        self.confirm_answer = answer;
    }

    /// Queue the answer for the next prompt (`None` cancels it)
    pub fn push_prompt_answer(&mut self, answer: Option<&str>) {
        self.prompt_answers.push_back(answer.map(str::to_string));
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl Default for ScriptedNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ScriptedNotifier {
    fn alert(&mut self, message: &str) {
        info!("ALERT: {}", message);
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        info!("CONFIRM: {} -> {}", message, self.confirm_answer);
        self.confirm_answer
    }

    fn prompt(&mut self, message: &str, default_value: &str) -> Option<String> {
        let answer = self
            .prompt_answers
            .pop_front()
            .unwrap_or_else(|| Some(default_value.to_string()));
        info!("PROMPT: {} -> {:?}", message, answer);
        answer
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPrinter {
    documents: Vec<String>,
}

impl MemoryPrinter {
    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}

impl Printer for MemoryPrinter {
    fn print_document(&mut self, html: &str) -> Result<()> {
        self.documents.push(html.to_string());
        Ok(())
    }
}

/// Every capability in one value, with a pluggable downloader
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost<D = MemoryDownloader> {
    pub renderer: MemoryRenderer,
    pub notifier: ScriptedNotifier,
    pub downloader: D,
    pub clipboard: MemoryClipboard,
    pub printer: MemoryPrinter,
}

impl HeadlessHost<MemoryDownloader> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Downloader> HeadlessHost<D> {
    pub fn with_downloader(downloader: D) -> Self {
        Self {
            renderer: MemoryRenderer::new(),
            notifier: ScriptedNotifier::new(),
            downloader,
            clipboard: MemoryClipboard::default(),
            printer: MemoryPrinter::default(),
        }
    }
}

impl<D> Renderer for HeadlessHost<D> {
    fn render_table(&mut self, view: TableView, table: &RenderedTable) {
        self.renderer.render_table(view, table);
    }

    fn render_kpis(&mut self, kpis: &KpiSnapshot) {
        self.renderer.render_kpis(kpis);
    }

    fn render_text(&mut self, panel: Panel, text: &str) {
        self.renderer.render_text(panel, text);
    }

    fn render_html(&mut self, panel: Panel, html: &str) {
        self.renderer.render_html(panel, html);
    }
}

impl<D: Downloader> Downloader for HeadlessHost<D> {
    fn download(&mut self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<()> {
        self.downloader.download(bytes, filename, mime_type)
    }
}

impl<D> Notifier for HeadlessHost<D> {
    fn alert(&mut self, message: &str) {
        self.notifier.alert(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.notifier.confirm(message)
    }

    fn prompt(&mut self, message: &str, default_value: &str) -> Option<String> {
        self.notifier.prompt(message, default_value)
    }
}

impl<D> Clipboard for HeadlessHost<D> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.write_text(text)
    }
}

impl<D> Printer for HeadlessHost<D> {
    fn print_document(&mut self, html: &str) -> Result<()> {
        self.printer.print_document(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_falls_back_to_default() {
        let mut notifier = ScriptedNotifier::new();
        notifier.push_prompt_answer(None);

        assert_eq!(notifier.prompt("Topic?", "Photosynthesis"), None);
        assert_eq!(notifier.prompt("Topic?", "Photosynthesis").as_deref(), Some("Photosynthesis"));
    }

    #[test]
    fn test_host_delegates_downloads() {
        let mut host = HeadlessHost::new();
        host.download(b"hello", "pitch.txt", "text/plain").unwrap();

        let file = host.downloader.last().unwrap();
        assert_eq!(file.filename, "pitch.txt");
        assert_eq!(file.text(), "hello");
    }
}
