use crate::domain::points::PointsBreakdown;
use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{ReceiptData, ReceiptId};
use crate::error::Result;
use tracing::{debug, info};

/// The entry point for the two receipt use cases.
///
/// `ReceiptService` owns the storage backend. Submitting stores a receipt and
/// hands back its id; querying looks the receipt up and scores it on demand.
pub struct ReceiptService {
    store: ReceiptStoreBox,
}

impl ReceiptService {
    /// Creates a new `ReceiptService` backed by `store`.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Stores a submitted receipt and returns its generated id.
    pub async fn submit(&self, data: ReceiptData) -> Result<ReceiptId> {
        let retailer = data.retailer.clone();
        let id = self.store.insert(data).await?;
        info!(%id, %retailer, "receipt stored");
        Ok(id)
    }

    /// Scores the receipt stored under `id`.
    ///
    /// Returns `Ok(None)` when no receipt has that id; deciding what an
    /// unknown id means to the caller is left to the interface layer.
    pub async fn points(&self, id: &ReceiptId) -> Result<Option<u64>> {
        let Some(receipt) = self.store.get(id).await? else {
            return Ok(None);
        };

        let breakdown = PointsBreakdown::evaluate(&receipt.data);
        debug!(%id, ?breakdown, "points computed");
        Ok(Some(breakdown.total()))
    }

    /// Number of receipts submitted so far.
    pub async fn receipt_count(&self) -> Result<usize> {
        self.store.len().await
    }
}
