//! Adapters implementing the domain ports.

pub mod id;
pub mod in_memory;
