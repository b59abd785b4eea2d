use std::collections::HashMap;

use crate::item::InventoryItem;
use crate::sync::OMITTED_MARKER;

/// Merge a freshly received remote item list with the last-known local list.
///
/// The remote list is authoritative for everything except the large fields
/// (`InventoryItem::large_fields`), which the outbound limiter may have
/// replaced with `OMITTED_MARKER`. Where the remote carries the marker and
/// the local copy has a real value, the local value is restored; a real
/// remote value always wins, even when local differs.
///
/// This is a one-directional fill-gaps pass, not a three-way merge: no
/// conflict detection, no state. Remote ordering and all non-large fields
/// pass through verbatim. Missing local counterparts and empty inputs are
/// the normal case, never an error.
pub fn merge_large_fields_from_local(
    remote: Vec<InventoryItem>,
    local: &[InventoryItem],
) -> Vec<InventoryItem> {
    // Last write wins on duplicate local ids
    let local_by_id: HashMap<&str, &InventoryItem> =
        local.iter().map(|item| (item.id.as_str(), item)).collect();

    remote
        .into_iter()
        .map(|mut item| {
            if let Some(cached) = local_by_id.get(item.id.as_str()) {
                let local_fields = cached.large_fields();
                for ((name, slot), (_, local_value)) in
                    item.large_fields_mut().into_iter().zip(local_fields)
                {
                    if slot.as_deref() != Some(OMITTED_MARKER) {
                        continue;
                    }
                    match local_value.as_deref() {
                        Some(value) if !value.is_empty() => {
                            log::debug!("restoring omitted {name} for item {}", cached.id);
                            *slot = Some(value.to_string());
                        }
                        // Nothing cached locally: the marker stays as-is
                        _ => {}
                    }
                }
            }
            item
        })
        .collect()
}
