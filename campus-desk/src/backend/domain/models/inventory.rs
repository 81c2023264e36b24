//! Inventory stock lines.
use shared::{AddInventoryRequest, InventoryItem};

use crate::backend::domain::record_store::{Keyed, NewRecord, TableRecord};
use crate::backend::domain::record_table::TableLayout;
use crate::backend::domain::values::{parse_number, text_or, Scalar};

pub const LAYOUT: TableLayout = TableLayout {
    columns: &["id", "item", "category", "qty", "location"],
    headers: &["ID", "Item", "Category", "Qty", "Location"],
    filter_field: "category",
};

impl Keyed for InventoryItem {
    fn id(&self) -> u64 {
        self.id
    }
}

impl TableRecord for InventoryItem {
    fn field(&self, name: &str) -> Option<Scalar> {
        match name {
            "id" => Some(Scalar::from(self.id)),
            "item" => Some(Scalar::from(&self.item)),
            "category" => Some(Scalar::from(&self.category)),
            "qty" => Some(Scalar::from(self.qty)),
            "location" => Some(Scalar::from(&self.location)),
            _ => None,
        }
    }
}

impl NewRecord for AddInventoryRequest {
    type Record = InventoryItem;

    fn into_record(self, id: u64, _today: &str) -> InventoryItem {
        InventoryItem {
            id,
            item: text_or(self.item.as_deref(), "Item"),
            category: text_or(self.category.as_deref(), "General"),
            qty: parse_number(&self.qty),
            location: self.location.unwrap_or_default(),
        }
    }
}

fn stock(id: u64, item: &str, category: &str, qty: f64, location: &str) -> InventoryItem {
    InventoryItem {
        id,
        item: item.to_string(),
        category: category.to_string(),
        qty,
        location: location.to_string(),
    }
}

pub fn demo_seed() -> Vec<InventoryItem> {
    vec![
        stock(1, "Whiteboard markers", "Stationery", 120.0, "Store A"),
        stock(2, "Projector", "Electronics", 4.0, "AV Room"),
        stock(3, "Chemistry kits", "Lab", 8.0, "Lab Store"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_defaults() {
        let request = AddInventoryRequest {
            item: None,
            category: Some(String::new()),
            qty: "".to_string(),
            location: None,
        };
        let record = request.into_record(1, "2025-10-01");
        assert_eq!(record.item, "Item");
        assert_eq!(record.category, "General");
        assert_eq!(record.qty, 0.0);
        assert_eq!(record.location, "");
    }
}
