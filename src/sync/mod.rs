pub mod merge;
pub mod payload;

pub use merge::merge_large_fields_from_local;
pub use payload::prepare_payload;

use thiserror::Error;

/// Marker written in place of a large field that was elided from an outbound
/// snapshot to fit the remote size limit. The inbound merger restores such
/// fields from the local cache, so the writer and the reader must use this
/// exact string. Never hardcode the literal elsewhere.
pub const OMITTED_MARKER: &str = "__FLIPTAX_OMITTED__";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(
        "snapshot payload is {size} bytes, above the {limit} byte remote limit \
         even after trimming images and long descriptions; remove large notes \
         or images and retry"
    )]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
