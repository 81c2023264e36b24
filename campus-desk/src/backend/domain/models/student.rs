//! Student enrolment records.
use shared::{AddStudentRequest, Student};

use crate::backend::domain::record_store::{Keyed, NewRecord, TableRecord};
use crate::backend::domain::record_table::TableLayout;
use crate::backend::domain::values::{text_or, Scalar};

pub const LAYOUT: TableLayout = TableLayout {
    columns: &["id", "name", "grade", "roll"],
    headers: &["ID", "Name", "Grade", "Roll"],
    filter_field: "grade",
};

impl Keyed for Student {
    fn id(&self) -> u64 {
        self.id
    }
}

impl TableRecord for Student {
    fn field(&self, name: &str) -> Option<Scalar> {
        match name {
            "id" => Some(Scalar::from(self.id)),
            "name" => Some(Scalar::from(&self.name)),
            "grade" => Some(Scalar::from(&self.grade)),
            "roll" => Some(Scalar::from(&self.roll)),
            "parent" => Some(Scalar::from(&self.parent)),
            _ => None,
        }
    }
}

impl NewRecord for AddStudentRequest {
    type Record = Student;

    fn into_record(self, id: u64, _today: &str) -> Student {
        Student {
            id,
            name: text_or(self.name.as_deref(), "Student"),
            grade: self.grade.unwrap_or_default(),
            roll: self.roll.unwrap_or_default(),
            parent: self.parent.unwrap_or_default(),
        }
    }
}

fn student(id: u64, name: &str, grade: &str, roll: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
        grade: grade.to_string(),
        roll: roll.to_string(),
        parent: String::new(),
    }
}

pub fn demo_seed() -> Vec<Student> {
    vec![
        student(1, "Aman Verma", "8", "08A"),
        student(2, "Priya Sharma", "9", "09B"),
        student(3, "Rahul Joshi", "7", "07C"),
    ]
}
