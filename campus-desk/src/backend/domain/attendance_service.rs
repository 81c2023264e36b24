//! Attendance tracker backed by the key-value store.
//!
//! The whole sheet is one JSON array stored under [`ATTENDANCE_KEY`]. Rows are
//! shown in the order they were recorded.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, info, warn};
use shared::{AttendanceRecord, TableView};

use super::calendar::Clock;
use super::models::attendance::{demo_seed, status_class, LAYOUT};
use super::record_table::RenderedTable;
use crate::backend::io::{Notifier, Renderer};
use crate::backend::storage::KeyValueStorage;

pub const ATTENDANCE_KEY: &str = "attendanceRecords";
pub const EMPTY_SHEET_MESSAGE: &str = "No attendance records yet.";
pub const CLEAR_CONFIRM_MESSAGE: &str = "Are you sure you want to clear all records?";

const STATUS_COLUMN: usize = 4;

/// Sheet rows with the status cell styled by attendance status
pub fn render_sheet(records: &[AttendanceRecord]) -> RenderedTable {
    let refs: Vec<&AttendanceRecord> = records.iter().collect();
    let mut table = RenderedTable::from_records(&refs, &LAYOUT).with_placeholder(EMPTY_SHEET_MESSAGE);
    for (row, record) in table.rows.iter_mut().zip(records) {
        if let Some(cell) = row.get_mut(STATUS_COLUMN) {
            cell.class = Some(status_class(&record.status).unwrap_or("").to_string());
        }
    }
    table
}

pub struct AttendanceService {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
}

impl AttendanceService {
    pub fn new(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Seed the sample sheet on first use, then render it
    pub fn initialize<H: Renderer + ?Sized>(&self, host: &mut H) -> Result<()> {
        let stored = self.storage.get_item(ATTENDANCE_KEY)?;
        if stored.filter(|value| !value.is_empty()).is_none() {
            let seed = demo_seed(&self.clock.today_short());
            self.save(&seed)?;
            info!("Seeded attendance sheet with {} records", seed.len());
        }
        self.render(host)
    }

    /// Current sheet. A missing or unreadable value reads as an empty sheet.
    pub fn load(&self) -> Result<Vec<AttendanceRecord>> {
        let Some(raw) = self.storage.get_item(ATTENDANCE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Ignoring unreadable attendance data: {}", e);
                Ok(Vec::new())
            }
        }
    }

    pub fn render<H: Renderer + ?Sized>(&self, host: &mut H) -> Result<()> {
        let records = self.load()?;
        debug!("Rendering {} attendance records", records.len());
        host.render_table(TableView::Attendance, &render_sheet(&records));
        Ok(())
    }

    /// Append a record and persist the sheet. An empty date means today.
    pub fn mark<H: Renderer + ?Sized>(&self, mut record: AttendanceRecord, host: &mut H) -> Result<()> {
        if record.date.trim().is_empty() {
            record.date = self.clock.today_short();
        }
        let mut records = self.load()?;
        info!("Marking {} as {} on {}", record.id, record.status, record.date);
        records.push(record);
        self.save(&records)?;
        self.render(host)
    }

    /// Remove the whole sheet after confirmation; returns whether it happened
    pub fn clear<H: Renderer + Notifier + ?Sized>(&self, host: &mut H) -> Result<bool> {
        if !host.confirm(CLEAR_CONFIRM_MESSAGE) {
            return Ok(false);
        }
        self.storage.remove_item(ATTENDANCE_KEY)?;
        info!("Attendance sheet cleared");
        self.render(host)?;
        Ok(true)
    }

    fn save(&self, records: &[AttendanceRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.storage.set_item(ATTENDANCE_KEY, &json)
    }
}
