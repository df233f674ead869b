use crate::domain::ports::{IdGeneratorBox, ReceiptStore};
use crate::domain::receipt::{Receipt, ReceiptData, ReceiptId};
use crate::error::{ReceiptError, Result};
use crate::infrastructure::id::UuidGenerator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Upper bound on id redraws before an insert gives up.
const MAX_ID_ATTEMPTS: usize = 16;

/// A thread-safe in-memory store for receipts.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Receipt>>>` to allow shared concurrent access.
/// Ids are drawn while the write lock is held, and an id already in the map is
/// redrawn, so every stored receipt has a unique id.
#[derive(Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
    ids: Arc<IdGeneratorBox>,
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::with_generator(Box::new(UuidGenerator))
    }
}

impl InMemoryReceiptStore {
    /// Creates a new, empty store issuing UUID v4 ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty store drawing ids from `ids`.
    pub fn with_generator(ids: IdGeneratorBox) -> Self {
        Self {
            receipts: Arc::new(RwLock::new(HashMap::new())),
            ids: Arc::new(ids),
        }
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, data: ReceiptData) -> Result<ReceiptId> {
        let mut receipts = self.receipts.write().await;
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if let Entry::Vacant(slot) = receipts.entry(id.clone()) {
                slot.insert(Receipt::new(id.clone(), data));
                return Ok(id);
            }
            tracing::warn!(%id, "generated receipt id already in use, drawing another");
        }
        Err(ReceiptError::StoreError(format!(
            "could not generate an unused receipt id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        let receipts = self.receipts.read().await;
        Ok(receipts.len())
    }
}
