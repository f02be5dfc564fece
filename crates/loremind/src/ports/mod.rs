//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (document store, completion API, chat).
//!
//! Implementations of these traits live in `adapters/` or in host crates.

pub mod integration;
pub mod repositories;
pub mod services;

// Re-exports
pub use integration::*;
pub use repositories::*;
pub use services::*;
