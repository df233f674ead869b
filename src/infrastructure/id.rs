use crate::domain::ports::IdGenerator;
use crate::domain::receipt::ReceiptId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Random UUID v4 identifiers. The default for the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonically increasing decimal identifiers starting at 1.
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    last: AtomicU64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> ReceiptId {
        let next = self.last.fetch_add(1, Ordering::Relaxed) + 1;
        ReceiptId::new(next.to_string())
    }
}
