//! Service Ports
//!
//! Abstract interfaces for external services.

mod completion_transport;
mod notifier;

pub use completion_transport::*;
pub use notifier::*;
