//! Completion Transport Port
//!
//! Abstract interface for one chat-completion round-trip.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, CompletionRequest};

/// Chat-completion transport
///
/// Sends exactly one request and returns the content of the first choice.
/// `Ok(None)` means the response was well-formed but carried no content;
/// transport, status and decoding failures are `Err`.
///
/// # Example
///
/// ```rust,ignore
/// use loremind::ports::CompletionTransport;
///
/// struct LocalModel { /* ... */ }
///
/// #[async_trait]
/// impl CompletionTransport for LocalModel {
///     async fn complete(&self, request: &CompletionRequest)
///         -> Result<Option<String>, DomainError> {
///         // Call the model
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, DomainError>;

    /// Name of the backing service (e.g. "openai")
    fn provider_name(&self) -> &str;
}
