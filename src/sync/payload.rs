use crate::snapshot::Snapshot;
use crate::sync::{SyncError, OMITTED_MARKER};

/// Large-field values longer than this are candidates for elision.
pub const LARGE_FIELD_MAX_CHARS: usize = 10_000;

/// Above this serialized size the shrink pass kicks in.
pub const SOFT_LIMIT_BYTES: usize = 800_000;

/// Remote document size limit. A payload still above this after shrinking
/// fails the write outright; nothing is truncated silently.
pub const HARD_LIMIT_BYTES: usize = 1_000_000;

/// Prepare a snapshot for the remote store, shrinking it if needed.
///
/// Two-stage: serialize and measure; if over the soft threshold, replace
/// every oversized large-field value (inventory and trash) with
/// `OMITTED_MARKER` and re-measure; if still over the hard ceiling, fail
/// with a descriptive error. The inbound merger restores elided fields from
/// the local cache on the next snapshot delivery.
///
/// Pure function of its input, cheap on the happy path; safe to call on
/// every debounced write attempt.
pub fn prepare_payload(snapshot: &Snapshot) -> Result<String, SyncError> {
    let serialized = serde_json::to_string(snapshot)?;
    if serialized.len() <= SOFT_LIMIT_BYTES {
        return Ok(serialized);
    }

    let mut trimmed = snapshot.clone();
    let mut elided = 0usize;
    for item in trimmed.inventory.iter_mut().chain(trimmed.trash.iter_mut()) {
        let id = item.id.clone();
        for (name, slot) in item.large_fields_mut() {
            if let Some(value) = slot.as_deref() {
                if value.len() > LARGE_FIELD_MAX_CHARS && value != OMITTED_MARKER {
                    log::debug!("eliding {name} ({} chars) on item {id}", value.len());
                    *slot = Some(OMITTED_MARKER.to_string());
                    elided += 1;
                }
            }
        }
    }

    let serialized = serde_json::to_string(&trimmed)?;
    if serialized.len() > HARD_LIMIT_BYTES {
        return Err(SyncError::PayloadTooLarge {
            size: serialized.len(),
            limit: HARD_LIMIT_BYTES,
        });
    }

    log::warn!(
        "snapshot over soft limit; elided {elided} large field(s), payload now {} bytes",
        serialized.len()
    );
    Ok(serialized)
}
