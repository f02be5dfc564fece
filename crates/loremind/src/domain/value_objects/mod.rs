//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod chat_model;
mod notice;
mod settings;
mod visibility;

pub use chat_model::*;
pub use notice::*;
pub use settings::*;
pub use visibility::*;
