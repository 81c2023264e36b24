//! HR roll.
use shared::{AddStaffRequest, StaffMember};

use crate::backend::domain::record_store::{Keyed, NewRecord, TableRecord};
use crate::backend::domain::record_table::TableLayout;
use crate::backend::domain::values::{parse_number, text_or, Scalar};

pub const LAYOUT: TableLayout = TableLayout {
    columns: &["id", "name", "role", "salary", "join"],
    headers: &["ID", "Name", "Role", "Salary", "Joined"],
    filter_field: "role",
};

impl Keyed for StaffMember {
    fn id(&self) -> u64 {
        self.id
    }
}

impl TableRecord for StaffMember {
    fn field(&self, name: &str) -> Option<Scalar> {
        match name {
            "id" => Some(Scalar::from(self.id)),
            "name" => Some(Scalar::from(&self.name)),
            "role" => Some(Scalar::from(&self.role)),
            "salary" => Some(Scalar::from(self.salary)),
            "join" => Some(Scalar::from(&self.join)),
            _ => None,
        }
    }
}

impl NewRecord for AddStaffRequest {
    type Record = StaffMember;

    fn into_record(self, id: u64, today: &str) -> StaffMember {
        StaffMember {
            id,
            name: text_or(self.name.as_deref(), "Unknown"),
            role: self.role,
            salary: parse_number(&self.salary),
            join: text_or(self.join.as_deref(), today),
        }
    }
}

fn member(id: u64, name: &str, role: &str, salary: f64, join: &str) -> StaffMember {
    StaffMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        salary,
        join: join.to_string(),
    }
}

pub fn demo_seed() -> Vec<StaffMember> {
    vec![
        member(1, "Asha Singh", "Teacher", 35000.0, "2023-06-01"),
        member(2, "Rohit Kumar", "Admin", 25000.0, "2022-09-12"),
        member(3, "Meena Patel", "Support", 18000.0, "2024-01-10"),
    ]
}
