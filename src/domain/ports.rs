use super::receipt::{Receipt, ReceiptData, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores `data` under a freshly generated id and returns that id.
    async fn insert(&self, data: ReceiptData) -> Result<ReceiptId>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>>;
    async fn len(&self) -> Result<usize>;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
pub type IdGeneratorBox = Box<dyn IdGenerator>;
