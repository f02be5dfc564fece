//! Repository Ports
//!
//! Abstract interfaces for document storage.

mod memory_store;

pub use memory_store::*;
