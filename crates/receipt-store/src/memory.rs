//! # Memory Store
//!
//! `RwLock`-guarded map of receipts.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get(id)      ── read guard ──► many readers at once                    │
//! │                                                                         │
//! │  create(r)    ── write guard ─► exclusive with every reader and writer  │
//! │                   │                                                     │
//! │                   └─ entry(id): Occupied → DuplicateIdentifier          │
//! │                                 Vacant   → insert                       │
//! │                                                                         │
//! │  The existence check and the insert happen under the same guard, so    │
//! │  two creates racing on one id cannot both see "absent".                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Poisoning
//! A writer's only mutation is one `insert` into a vacant entry of a fully
//! built `Arc<Receipt>`. A panic elsewhere while holding the guard cannot
//! leave a half-written receipt behind, so a poisoned lock is recovered
//! with [`PoisonError::into_inner`] instead of being reported.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use receipt_core::Receipt;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Process-wide receipt store.
///
/// ## Usage
/// ```rust,ignore
/// let store = Arc::new(ReceiptStore::new());
///
/// store.create(receipt)?;
/// let receipt = store.get(&id)?;
/// ```
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Arc<Receipt>>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a receipt under its own `id`.
    ///
    /// ## Errors
    /// - [`StoreError::DuplicateIdentifier`] if the id is taken; the store is
    ///   left exactly as it was
    pub fn create(&self, receipt: Receipt) -> StoreResult<()> {
        let mut receipts = self.write();

        match receipts.entry(receipt.id.clone()) {
            Entry::Occupied(entry) => Err(StoreError::duplicate(entry.key().as_str())),
            Entry::Vacant(entry) => {
                debug!(receipt_id = %entry.key(), items = receipt.items.len(), "Receipt stored");
                entry.insert(Arc::new(receipt));
                Ok(())
            }
        }
    }

    /// Returns a shared, read-only view of the receipt stored under `id`.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if nothing is stored under `id`
    pub fn get(&self, id: &str) -> StoreResult<Arc<Receipt>> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Checks whether a receipt is stored under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Tears the store down, handing back everything it held.
    pub fn into_inner(self) -> HashMap<String, Arc<Receipt>> {
        self.receipts
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Receipt>>> {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Receipt>>> {
        self.receipts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::Item;
    use std::thread;
    use uuid::Uuid;

    fn morning_receipt(id: &str) -> Receipt {
        Receipt {
            id: id.to_string(),
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "2.65".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", "1.25"),
                Item::new("Dasani", "1.40"),
            ],
        }
    }

    fn simple_receipt(id: &str) -> Receipt {
        Receipt {
            id: id.to_string(),
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:13".to_string(),
            total: "1.25".to_string(),
            items: vec![Item::new("Pepsi - 12-oz", "1.25")],
        }
    }

    fn snapshot(store: &ReceiptStore) -> HashMap<String, Receipt> {
        store
            .read()
            .iter()
            .map(|(id, receipt)| (id.clone(), Receipt::clone(receipt)))
            .collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ReceiptStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let store = ReceiptStore::new();
        let morning = morning_receipt(&Uuid::new_v4().to_string());
        let simple = simple_receipt(&Uuid::new_v4().to_string());

        store.create(morning.clone()).unwrap();
        store.create(simple.clone()).unwrap();

        assert_eq!(*store.get(&morning.id).unwrap(), morning);
        assert_eq!(*store.get(&simple.id).unwrap(), simple);
        assert_eq!(store.len(), 2);
        assert!(store.contains(&morning.id));
    }

    #[test]
    fn test_duplicate_id_is_rejected_and_store_unchanged() {
        let store = ReceiptStore::new();
        let id = Uuid::new_v4().to_string();
        store.create(morning_receipt(&id)).unwrap();

        let before = snapshot(&store);
        let result = store.create(simple_receipt(&id));

        assert_eq!(result, Err(StoreError::duplicate(id.clone())));
        assert_eq!(snapshot(&store), before);
        assert_eq!(store.get(&id).unwrap().retailer, "Walgreens");
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = ReceiptStore::new();
        store.create(simple_receipt("known")).unwrap();

        assert_eq!(store.get("unknown"), Err(StoreError::not_found("unknown")));
        assert!(!store.contains("unknown"));
    }

    #[test]
    fn test_identical_content_under_distinct_ids_is_allowed() {
        let store = ReceiptStore::new();
        store.create(simple_receipt("first")).unwrap();
        store.create(simple_receipt("second")).unwrap();

        assert_eq!(store.len(), 2);
        let first = store.get("first").unwrap();
        let second = store.get("second").unwrap();
        assert_eq!(first.retailer, second.retailer);
        assert_eq!(first.items, second.items);
    }

    #[test]
    fn test_get_returns_shared_view_of_same_receipt() {
        let store = ReceiptStore::new();
        store.create(simple_receipt("shared")).unwrap();

        let a = store.get("shared").unwrap();
        let b = store.get("shared").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_into_inner_hands_back_contents() {
        let store = ReceiptStore::new();
        store.create(simple_receipt("a")).unwrap();
        store.create(morning_receipt("b")).unwrap();

        let contents = store.into_inner();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents["b"].retailer, "Walgreens");
    }

    #[test]
    fn test_concurrent_creates_and_reads() {
        const WRITERS: usize = 32;
        const READERS: usize = 32;

        let store = ReceiptStore::new();
        let known = morning_receipt("pre-populated");
        store.create(known.clone()).unwrap();

        let ids: Vec<String> = (0..WRITERS).map(|_| Uuid::new_v4().to_string()).collect();

        thread::scope(|scope| {
            for id in &ids {
                let store = &store;
                scope.spawn(move || store.create(simple_receipt(id)).unwrap());
            }
            for _ in 0..READERS {
                let store = &store;
                let known = &known;
                scope.spawn(move || {
                    // Every read sees the whole receipt or nothing
                    let receipt = store.get("pre-populated").unwrap();
                    assert_eq!(*receipt, *known);
                    assert_eq!(store.get("missing"), Err(StoreError::not_found("missing")));
                });
            }
        });

        assert_eq!(store.len(), WRITERS + 1);
        for id in &ids {
            assert_eq!(*store.get(id).unwrap(), simple_receipt(id));
        }
    }

    #[test]
    fn test_concurrent_creates_on_one_id_have_one_winner() {
        const CONTENDERS: usize = 16;

        let store = ReceiptStore::new();
        let id = Uuid::new_v4().to_string();

        let results: Vec<StoreResult<()>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..CONTENDERS)
                .map(|_| {
                    let store = &store;
                    let id = &id;
                    scope.spawn(move || store.create(simple_receipt(id)))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winners = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::DuplicateIdentifier { .. })))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(duplicates, CONTENDERS - 1);
        assert_eq!(store.len(), 1);
    }
}
