use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a finance entry adds to or draws from the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinanceType {
    Income,
    Expense,
}

impl FinanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinanceType::Income => "Income",
            FinanceType::Expense => "Expense",
        }
    }
}

impl fmt::Display for FinanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finance ledger entry (fee collection, purchase, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: FinanceType,
    pub amount: f64,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub notes: String,
}

/// A member of staff on the HR roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub salary: f64,
    /// Joining date (YYYY-MM-DD)
    pub join: String,
}

/// A stock line in the school inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u64,
    pub item: String,
    pub category: String,
    pub qty: f64,
    pub location: String,
}

/// A student enrolment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    /// Grade is kept as entered; filters compare its string form
    pub grade: String,
    pub roll: String,
    pub parent: String,
}

/// Form input for a new finance entry. Numeric fields carry the raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFinanceRequest {
    pub title: Option<String>,
    pub entry_type: FinanceType,
    pub amount: String,
    pub date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddStaffRequest {
    pub name: Option<String>,
    pub role: String,
    pub salary: String,
    pub join: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddInventoryRequest {
    pub item: Option<String>,
    pub category: Option<String>,
    pub qty: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddStudentRequest {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub roll: Option<String>,
    pub parent: Option<String>,
}

/// One row of the persisted attendance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Roll identifier, e.g. "25CL0001"
    pub id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub section: String,
    /// Present / Absent / Leave
    pub status: String,
    pub date: String,
}

/// A teaching resource saved in the resource hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Lowercase, trimmed tags
    pub tags: Vec<String>,
    pub added: String,
}

/// Difficulty selected in the quiz builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Any label other than "Easy" or "Hard" is treated as medium
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Easy" => Difficulty::Easy,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

/// A generated multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    /// 1-based position in the quiz
    pub id: u32,
    pub question: String,
    pub options: [String; 4],
    /// Always 0: the first option is the correct one
    pub correct_option_index: usize,
}

/// Question and canned answer recorded by the chatbot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubtLogEntry {
    pub question: String,
    pub answer: String,
    pub timestamp: String,
}

/// Raw lesson planner form values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LessonPlanRequest {
    pub topic: String,
    pub grade: String,
    /// Minutes as typed; parsed leniently
    pub duration: String,
    pub focus: String,
}

/// Raw quiz builder form values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    /// Question count as typed; parsed leniently
    pub count: String,
    pub difficulty: Difficulty,
}

/// KPI card values shown on the ERP dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub net_balance: f64,
    /// Net balance with currency symbol and Indian digit grouping
    pub formatted_budget: String,
    pub staff_count: usize,
    pub inventory_quantity: f64,
}

/// A file produced by one of the export actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFile {
    pub content: String,
    pub filename: String,
    pub mime_type: String,
    /// Data rows, header excluded
    pub row_count: usize,
}

/// Tables that can be rendered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableView {
    Finance,
    Hr,
    Inventory,
    Students,
    Attendance,
}

/// Text panels that can be rendered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    ReportOutput,
    LessonOutput,
    QuizOutput,
    ChatOutput,
    ResourceList,
}

/// ERP dashboard modules selectable from the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    Finance,
    Hr,
    Inventory,
    Students,
    Reports,
}

impl Module {
    /// Identifier used by the module switcher buttons
    pub fn key(&self) -> &'static str {
        match self {
            Module::Finance => "finance",
            Module::Hr => "hr",
            Module::Inventory => "inventory",
            Module::Students => "students",
            Module::Reports => "reports",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "finance" => Some(Module::Finance),
            "hr" => Some(Module::Hr),
            "inventory" => Some(Module::Inventory),
            "students" => Some(Module::Students),
            "reports" => Some(Module::Reports),
            _ => None,
        }
    }

    /// Table shown by this module, if it has one
    pub fn table_view(&self) -> Option<TableView> {
        match self {
            Module::Finance => Some(TableView::Finance),
            Module::Hr => Some(TableView::Hr),
            Module::Inventory => Some(TableView::Inventory),
            Module::Students => Some(TableView::Students),
            Module::Reports => None,
        }
    }
}
