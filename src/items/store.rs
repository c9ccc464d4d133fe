use super::types::{Item, ItemDraft, ItemPatch, StoreError};

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory item store.
///
/// Ids are handed out by an atomic counter and never reused, even after a
/// delete. The map serializes access per entry, which is enough for the
/// guarantees this service makes: unique monotonic ids and no lost partial
/// updates on a single entry.
pub struct ItemStore {
    items: DashMap<u64, Item>,
    next_id: AtomicU64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn list(&self) -> Vec<Item> {
        self.items.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: u64) -> Result<Item, StoreError> {
        self.items
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }

    /// Validates the payload, assigns the next id, and stores the item.
    /// The counter only advances on a valid payload.
    pub fn create(&self, payload: serde_json::Value) -> Result<Item, StoreError> {
        let draft = ItemDraft::from_payload(payload)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = draft.into_item(id);
        self.items.insert(id, item.clone());

        tracing::debug!("Created item {}", id);
        Ok(item)
    }

    /// Merges the keys present in the payload into the stored item. The
    /// payload is validated before the entry is touched, so a bad patch
    /// never leaves a half-applied item behind.
    pub fn update(&self, id: u64, payload: serde_json::Value) -> Result<Item, StoreError> {
        let patch = ItemPatch::from_payload(payload)?;

        let mut entry = self.items.get_mut(&id).ok_or(StoreError::NotFound)?;
        entry.apply(&patch);

        tracing::debug!("Updated item {}", id);
        Ok(entry.value().clone())
    }

    pub fn delete(&self, id: u64) -> Result<Item, StoreError> {
        let (_, item) = self.items.remove(&id).ok_or(StoreError::NotFound)?;

        tracing::debug!("Deleted item {}", id);
        Ok(item)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
