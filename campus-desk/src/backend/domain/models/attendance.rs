//! Attendance sheet rows.
use shared::AttendanceRecord;

use crate::backend::domain::record_store::TableRecord;
use crate::backend::domain::record_table::TableLayout;
use crate::backend::domain::values::Scalar;

pub const LAYOUT: TableLayout = TableLayout {
    columns: &["id", "name", "class", "section", "status", "date"],
    headers: &["ID", "Name", "Class", "Section", "Status", "Date"],
    filter_field: "status",
};

impl TableRecord for AttendanceRecord {
    fn field(&self, name: &str) -> Option<Scalar> {
        match name {
            "id" => Some(Scalar::from(&self.id)),
            "name" => Some(Scalar::from(&self.name)),
            "class" => Some(Scalar::from(&self.class_name)),
            "section" => Some(Scalar::from(&self.section)),
            "status" => Some(Scalar::from(&self.status)),
            "date" => Some(Scalar::from(&self.date)),
            _ => None,
        }
    }
}

/// Styling class for a status cell; unknown statuses get none
pub fn status_class(status: &str) -> Option<&'static str> {
    match status.to_lowercase().as_str() {
        "present" => Some("status-present"),
        "absent" => Some("status-absent"),
        "leave" => Some("status-leave"),
        _ => None,
    }
}

fn row(id: &str, name: &str, section: &str, status: &str, date: &str) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        name: name.to_string(),
        class_name: "12".to_string(),
        section: section.to_string(),
        status: status.to_string(),
        date: date.to_string(),
    }
}

/// Five sample students, all dated `date`
pub fn demo_seed(date: &str) -> Vec<AttendanceRecord> {
    vec![
        row("25CL0001", "Shreyansh Gupta", "A", "Present", date),
        row("25CL0002", "Priya Singh", "A", "Absent", date),
        row("25CL0003", "Rahul Sharma", "B", "Leave", date),
        row("25CL0004", "Ananya Verma", "B", "Present", date),
        row("25CL0005", "Rohan Mehta", "A", "Present", date),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_is_case_insensitive() {
        assert_eq!(status_class("Present"), Some("status-present"));
        assert_eq!(status_class("ABSENT"), Some("status-absent"));
        assert_eq!(status_class("leave"), Some("status-leave"));
        assert_eq!(status_class("Late"), None);
    }
}
