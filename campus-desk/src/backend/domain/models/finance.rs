//! Finance ledger entries.
use shared::{AddFinanceRequest, FinanceEntry, FinanceType};

use crate::backend::domain::record_store::{Keyed, NewRecord, TableRecord};
use crate::backend::domain::record_table::TableLayout;
use crate::backend::domain::values::{parse_number, text_or, Scalar};

pub const LAYOUT: TableLayout = TableLayout {
    columns: &["id", "title", "type", "amount", "date", "notes"],
    headers: &["ID", "Title", "Type", "Amount", "Date", "Notes"],
    filter_field: "type",
};

impl Keyed for FinanceEntry {
    fn id(&self) -> u64 {
        self.id
    }
}

impl TableRecord for FinanceEntry {
    fn field(&self, name: &str) -> Option<Scalar> {
        match name {
            "id" => Some(Scalar::from(self.id)),
            "title" => Some(Scalar::from(&self.title)),
            "type" => Some(Scalar::from(self.entry_type.as_str())),
            "amount" => Some(Scalar::from(self.amount)),
            "date" => Some(Scalar::from(&self.date)),
            "notes" => Some(Scalar::from(&self.notes)),
            _ => None,
        }
    }
}

impl NewRecord for AddFinanceRequest {
    type Record = FinanceEntry;

    fn into_record(self, id: u64, today: &str) -> FinanceEntry {
        FinanceEntry {
            id,
            title: text_or(self.title.as_deref(), "Untitled"),
            entry_type: self.entry_type,
            amount: parse_number(&self.amount),
            date: text_or(self.date.as_deref(), today),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

fn entry(id: u64, title: &str, entry_type: FinanceType, amount: f64, date: &str, notes: &str) -> FinanceEntry {
    FinanceEntry {
        id,
        title: title.to_string(),
        entry_type,
        amount,
        date: date.to_string(),
        notes: notes.to_string(),
    }
}

/// Sample ledger loaded at start-up and on reset
pub fn demo_seed() -> Vec<FinanceEntry> {
    vec![
        entry(1, "Tuition collection", FinanceType::Income, 125000.0, "2025-09-01", "Sept fees"),
        entry(2, "Lab equipment", FinanceType::Expense, 45000.0, "2025-09-08", "Microscopes"),
        entry(3, "Exam fees", FinanceType::Income, 8000.0, "2025-09-20", ""),
    ]
}
