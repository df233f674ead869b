//! Application layer orchestrating the receipt use cases.
//!
//! This module defines the `ReceiptService`, which stands between the HTTP
//! interface and the storage port and invokes the points rule engine.

pub mod service;
