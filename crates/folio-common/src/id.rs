use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{TileId, TileKind};

static TILE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Short random hex token taken from a v4 UUID.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Generate a fresh tile identifier: `{kind}-{unix_millis}-{seq}-{random}`.
///
/// The sequence number is process-wide and strictly increasing, so two ids
/// minted in the same millisecond still differ; the random suffix keeps ids
/// from separate processes apart.
pub fn new_tile_id(kind: TileKind) -> TileId {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = TILE_SEQ.fetch_add(1, Ordering::Relaxed);
    TileId::new(format!(
        "{}-{millis}-{seq}-{}",
        kind.as_str(),
        new_correlation_id()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn correlation_id_length() {
        assert_eq!(new_correlation_id().len(), 8);
    }

    #[test]
    fn correlation_id_is_hex() {
        let cid = new_correlation_id();
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tile_id_starts_with_kind() {
        let id = new_tile_id(TileKind::Projects);
        assert!(id.as_str().starts_with("projects-"));
        assert_eq!(id.as_str().split('-').count(), 4);
    }

    #[test]
    fn tile_ids_are_unique_in_a_burst() {
        let ids: HashSet<TileId> = (0..1000).map(|_| new_tile_id(TileKind::Home)).collect();
        assert_eq!(ids.len(), 1000);
    }
}
