//! Canonical JSON projection.

use kpm_model::Protokoll;

/// Render the protocol as pretty-printed JSON, the exact bytes written
/// on export and shown in previews.
pub fn to_canonical_json(protokoll: &Protokoll) -> serde_json::Result<String> {
    serde_json::to_string_pretty(protokoll)
}
