use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

use crate::item::{Expense, InventoryItem};

/// A loosely typed per-category spec value. The host application stores
/// arbitrary string-keyed attribute maps per category (e.g. "RAM" -> 16,
/// "Condition" -> "B-grade"); no key set is guaranteed at compile time and
/// validating required keys is a caller concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

/// Full application snapshot as exchanged with the remote document store.
///
/// `settings` and `goals` are opaque to this crate and passed through
/// verbatim; only inventory, trash and expenses carry typed semantics here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub trash: Vec<InventoryItem>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(default)]
    pub goals: serde_json::Value,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub category_fields: HashMap<String, HashMap<String, FieldValue>>,
}

/// Read a snapshot from JSON
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Snapshot> {
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemStatus;

    #[test]
    fn parse_snapshot_wire_format() {
        let json = r#"{
            "inventory": [
                {"id": "a", "name": "GPU", "buyPrice": 120, "status": "InStock"}
            ],
            "trash": [],
            "expenses": [
                {"id": "e1", "description": "Tape", "amount": 3.5, "date": "2024-01-05", "category": "Packaging"}
            ],
            "settings": {"taxMode": "DifferentialVat"},
            "categories": ["Electronics", "Furniture"],
            "categoryFields": {
                "Electronics": {"RAM": 16, "Condition": "B-grade"}
            }
        }"#;

        let snapshot = read_json(json.as_bytes()).unwrap();
        assert_eq!(snapshot.inventory.len(), 1);
        assert_eq!(snapshot.inventory[0].status, ItemStatus::InStock);
        assert_eq!(snapshot.expenses.len(), 1);
        assert_eq!(snapshot.categories.len(), 2);

        let fields = &snapshot.category_fields["Electronics"];
        assert_eq!(fields["RAM"], FieldValue::Number(16.0));
        assert_eq!(fields["Condition"], FieldValue::Text("B-grade".to_string()));
        assert_eq!(snapshot.settings["taxMode"], "DifferentialVat");
    }

    #[test]
    fn empty_payload_parses_to_empty_snapshot() {
        let snapshot = read_json("{}".as_bytes()).unwrap();
        assert!(snapshot.inventory.is_empty());
        assert!(snapshot.trash.is_empty());
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.category_fields.is_empty());
    }
}
