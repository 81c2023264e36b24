//! ERP dashboard service.
//!
//! Owns the finance, HR, inventory and student stores together with the filter
//! selected for each table view and the active module. Every mutation
//! re-renders the affected table and the KPI cards through the host, the same
//! way each view refreshes after a form submit.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, info, warn};
use shared::{
    AddFinanceRequest, AddInventoryRequest, AddStaffRequest, AddStudentRequest, FinanceEntry, InventoryItem,
    KpiSnapshot, Module, Panel, StaffMember, Student, TableView,
};

use super::calendar::Clock;
use super::errors::DeskError;
use super::export_service::{
    table_to_csv, to_csv, ExportService, ERP_REPORT_FILENAME, ERP_SAMPLE_REPORT_FILENAME, ERP_TABLE_EXPORT_FILENAME,
};
use super::kpi_service::KpiService;
use super::models::{finance, inventory, staff, student};
use super::record_store::{Keyed, RecordStore, TableRecord, ALL};
use super::record_table::{RenderedTable, TableLayout};
use super::values::Scalar;
use crate::backend::io::{Downloader, Notifier, Renderer};

pub const REPORT_HEADER: [&str; 7] = ["Type", "ID", "Title/Name", "Category/Role", "Value/Qty", "Date/Roll", "Notes"];
pub const DEMO_LOADED_MESSAGE: &str = "Demo data loaded. Use Generate Monthly Report to create CSV.";
pub const REPORT_READY_MESSAGE: &str = "Report generated in the Reports panel. Use Download to save CSV.";
pub const RESET_CONFIRM_MESSAGE: &str = "Reset demo data to defaults?";
pub const RESET_DONE_MESSAGE: &str = "Demo data reset.";

const ERP_VIEWS: [TableView; 4] = [TableView::Finance, TableView::Hr, TableView::Inventory, TableView::Students];

fn render_store<T: Keyed + TableRecord>(store: &RecordStore<T>, layout: &TableLayout, filter: &str) -> RenderedTable {
    RenderedTable::from_records(&store.project(layout.filter_field, filter), layout)
}

pub struct ErpService {
    finance: RecordStore<FinanceEntry>,
    staff: RecordStore<StaffMember>,
    inventory: RecordStore<InventoryItem>,
    students: RecordStore<Student>,
    filters: HashMap<TableView, String>,
    tables: HashMap<TableView, RenderedTable>,
    active_module: Module,
    kpi_service: KpiService,
    export_service: ExportService,
    clock: Arc<dyn Clock>,
}

impl ErpService {
    /// Create a dashboard with empty stores, finance active
    pub fn new(kpi_service: KpiService, clock: Arc<dyn Clock>) -> Self {
        Self {
            finance: RecordStore::new(),
            staff: RecordStore::new(),
            inventory: RecordStore::new(),
            students: RecordStore::new(),
            filters: HashMap::new(),
            tables: HashMap::new(),
            active_module: Module::Finance,
            kpi_service,
            export_service: ExportService::new(),
            clock,
        }
    }

    pub fn finance(&self) -> &RecordStore<FinanceEntry> {
        &self.finance
    }

    pub fn staff(&self) -> &RecordStore<StaffMember> {
        &self.staff
    }

    pub fn inventory(&self) -> &RecordStore<InventoryItem> {
        &self.inventory
    }

    pub fn students(&self) -> &RecordStore<Student> {
        &self.students
    }

    pub fn active_module(&self) -> Module {
        self.active_module
    }

    /// Current filter value of a view ("All" when never set)
    pub fn filter(&self, view: TableView) -> &str {
        self.filters.get(&view).map(String::as_str).unwrap_or(ALL)
    }

    /// Last table rendered for a view
    pub fn rendered_table(&self, view: TableView) -> Option<&RenderedTable> {
        self.tables.get(&view)
    }

    pub fn kpis(&self) -> KpiSnapshot {
        self.kpi_service.snapshot(&self.finance, &self.staff, &self.inventory)
    }

    /// Replace every store with the demo seed and render everything
    pub fn load_demo_data<H: Renderer + ?Sized>(&mut self, host: &mut H) {
        self.finance.replace_all(finance::demo_seed());
        self.staff.replace_all(staff::demo_seed());
        self.inventory.replace_all(inventory::demo_seed());
        self.students.replace_all(student::demo_seed());
        self.filters.clear();

        for view in ERP_VIEWS {
            self.render_view(view, host);
        }
        self.render_kpis(host);
        host.render_text(Panel::ReportOutput, DEMO_LOADED_MESSAGE);
        info!(
            "Demo data loaded: {} finance, {} staff, {} inventory, {} students",
            self.finance.len(),
            self.staff.len(),
            self.inventory.len(),
            self.students.len()
        );
    }

    pub fn add_finance<H: Renderer + ?Sized>(&mut self, request: AddFinanceRequest, host: &mut H) -> FinanceEntry {
        let today = self.clock.today_iso();
        let entry = self.finance.add(request, &today).clone();
        info!("Added finance entry {} ({} {})", entry.id, entry.entry_type, entry.amount);
        self.refresh_after_add(TableView::Finance, host);
        entry
    }

    pub fn add_staff<H: Renderer + ?Sized>(&mut self, request: AddStaffRequest, host: &mut H) -> StaffMember {
        let today = self.clock.today_iso();
        let member = self.staff.add(request, &today).clone();
        info!("Added staff member {} ({})", member.id, member.role);
        self.refresh_after_add(TableView::Hr, host);
        member
    }

    pub fn add_item<H: Renderer + ?Sized>(&mut self, request: AddInventoryRequest, host: &mut H) -> InventoryItem {
        let today = self.clock.today_iso();
        let item = self.inventory.add(request, &today).clone();
        info!("Added inventory item {} ({} x {})", item.id, item.item, item.qty);
        self.refresh_after_add(TableView::Inventory, host);
        item
    }

    pub fn add_student<H: Renderer + ?Sized>(&mut self, request: AddStudentRequest, host: &mut H) -> Student {
        let today = self.clock.today_iso();
        let student = self.students.add(request, &today).clone();
        info!("Added student {} (grade {})", student.id, student.grade);
        self.refresh_after_add(TableView::Students, host);
        student
    }

    pub fn filter_finance<H: Renderer + ?Sized>(&mut self, entry_type: &str, host: &mut H) {
        self.apply_filter(TableView::Finance, entry_type, host);
    }

    pub fn filter_staff<H: Renderer + ?Sized>(&mut self, role: &str, host: &mut H) {
        self.apply_filter(TableView::Hr, role, host);
    }

    pub fn filter_inventory<H: Renderer + ?Sized>(&mut self, category: &str, host: &mut H) {
        self.apply_filter(TableView::Inventory, category, host);
    }

    pub fn filter_students<H: Renderer + ?Sized>(&mut self, grade: &str, host: &mut H) {
        self.apply_filter(TableView::Students, grade, host);
    }

    /// Empty one store and re-render its view
    pub fn clear<H: Renderer + ?Sized>(&mut self, view: TableView, host: &mut H) {
        match view {
            TableView::Finance => self.finance.clear(),
            TableView::Hr => self.staff.clear(),
            TableView::Inventory => self.inventory.clear(),
            TableView::Students => self.students.clear(),
            TableView::Attendance => {
                warn!("Attendance records are not held by the ERP dashboard");
                return;
            }
        }
        info!("Cleared {:?} store", view);
        self.render_view(view, host);
        self.render_kpis(host);
    }

    pub fn switch_module(&mut self, module: Module) {
        debug!("Switching module {} -> {}", self.active_module.key(), module.key());
        self.active_module = module;
    }

    /// Build the combined report CSV and show it in the report panel
    pub fn generate_report<H: Renderer + ?Sized>(&self, host: &mut H) -> String {
        let mut rows: Vec<Vec<Scalar>> = vec![REPORT_HEADER.iter().map(|&h| Scalar::from(h)).collect()];
        rows.extend(self.finance.iter().map(|f| {
            vec![
                Scalar::from("Finance"),
                Scalar::from(f.id),
                Scalar::from(&f.title),
                Scalar::from(f.entry_type.as_str()),
                Scalar::from(f.amount),
                Scalar::from(&f.date),
                Scalar::from(&f.notes),
            ]
        }));
        rows.extend(self.staff.iter().map(|h| {
            vec![
                Scalar::from("HR"),
                Scalar::from(h.id),
                Scalar::from(&h.name),
                Scalar::from(&h.role),
                Scalar::from(h.salary),
                Scalar::from(&h.join),
                Scalar::from(""),
            ]
        }));
        rows.extend(self.inventory.iter().map(|i| {
            vec![
                Scalar::from("Inventory"),
                Scalar::from(i.id),
                Scalar::from(&i.item),
                Scalar::from(&i.category),
                Scalar::from(i.qty),
                Scalar::from(&i.location),
                Scalar::from(""),
            ]
        }));
        rows.extend(self.students.iter().map(|s| {
            vec![
                Scalar::from("Student"),
                Scalar::from(s.id),
                Scalar::from(&s.name),
                Scalar::from(&s.grade),
                Scalar::from(&s.roll),
                Scalar::from(""),
                Scalar::from(&s.parent),
            ]
        }));

        let report = to_csv(rows);
        host.render_text(Panel::ReportOutput, &report);
        debug!("Generated report with {} lines", report.lines().count());
        report
    }

    /// "Generate Monthly Report": fill the report panel and tell the user
    pub fn generate_monthly_report<H: Renderer + Notifier + ?Sized>(&self, host: &mut H) -> String {
        let report = self.generate_report(host);
        host.alert(REPORT_READY_MESSAGE);
        self.render_kpis(host);
        report
    }

    pub fn download_report<H>(&self, host: &mut H) -> Result<bool>
    where
        H: Renderer + Notifier + Downloader + ?Sized,
    {
        self.download_report_as(ERP_REPORT_FILENAME, host)
    }

    pub fn download_sample_report<H>(&self, host: &mut H) -> Result<bool>
    where
        H: Renderer + Notifier + Downloader + ?Sized,
    {
        self.download_report_as(ERP_SAMPLE_REPORT_FILENAME, host)
    }

    fn download_report_as<H>(&self, filename: &str, host: &mut H) -> Result<bool>
    where
        H: Renderer + Notifier + Downloader + ?Sized,
    {
        let report = self.generate_report(host);
        let file = self.export_service.csv_file(report, filename);
        self.export_service.trigger_download(&file, host)
    }

    /// Export the table shown by the active module, as displayed.
    /// The table is rebuilt from the store so views not yet rendered export too.
    pub fn export_visible_table<H>(&self, host: &mut H) -> Result<bool>
    where
        H: Notifier + Downloader + ?Sized,
    {
        let table = self
            .active_module
            .table_view()
            .and_then(|view| self.build_table(view));
        let Some(table) = table else {
            warn!("No table to export for module {}", self.active_module.key());
            host.alert(&DeskError::NoVisibleTable.to_string());
            return Ok(false);
        };

        let file = self.export_service.csv_file(table_to_csv(&table), ERP_TABLE_EXPORT_FILENAME);
        self.export_service.trigger_download(&file, host)
    }

    /// Restore the demo seed after confirmation; returns whether it happened
    pub fn reset_demo<H: Renderer + Notifier + ?Sized>(&mut self, host: &mut H) -> bool {
        if !host.confirm(RESET_CONFIRM_MESSAGE) {
            debug!("Demo reset cancelled");
            return false;
        }
        self.finance.clear();
        self.staff.clear();
        self.inventory.clear();
        self.students.clear();
        self.load_demo_data(host);
        host.alert(RESET_DONE_MESSAGE);
        true
    }

    fn refresh_after_add<H: Renderer + ?Sized>(&mut self, view: TableView, host: &mut H) {
        self.filters.insert(view, ALL.to_string());
        self.render_view(view, host);
        self.render_kpis(host);
    }

    fn apply_filter<H: Renderer + ?Sized>(&mut self, view: TableView, value: &str, host: &mut H) {
        debug!("Filtering {:?} by {:?}", view, value);
        self.filters.insert(view, value.to_string());
        self.render_view(view, host);
        self.render_kpis(host);
    }

    /// Table for `view` under its current filter; `None` for attendance
    fn build_table(&self, view: TableView) -> Option<RenderedTable> {
        let filter = self.filter(view);
        let table = match view {
            TableView::Finance => render_store(&self.finance, &finance::LAYOUT, filter),
            TableView::Hr => render_store(&self.staff, &staff::LAYOUT, filter),
            TableView::Inventory => render_store(&self.inventory, &inventory::LAYOUT, filter),
            TableView::Students => render_store(&self.students, &student::LAYOUT, filter),
            TableView::Attendance => return None,
        };
        Some(table)
    }

    fn render_view<H: Renderer + ?Sized>(&mut self, view: TableView, host: &mut H) {
        let Some(table) = self.build_table(view) else {
            return;
        };
        host.render_table(view, &table);
        self.tables.insert(view, table);
    }

    fn render_kpis<H: Renderer + ?Sized>(&self, host: &mut H) {
        host.render_kpis(&self.kpis());
    }
}
