//! Completion Dispatcher - Prompt assembly and one-shot completion
//!
//! Turns a user prompt and an optional persona into a two-message request,
//! sends it once and folds every failure into a [`DispatchOutcome`].
//! Nothing here returns an error to the caller.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::{AssistantSettings, CompletionRequest, DispatchOutcome};
use crate::ports::{CompletionTransport, Notifier};

/// System instruction used when no persona is named.
pub const GENERIC_SYSTEM_PROMPT: &str = "You are a helpful and in-character fantasy assistant.";

const MISSING_KEY_NOTICE: &str = "No OpenAI API key set in settings.";
const API_ERROR_NOTICE: &str = "ChatGPT API error — check console for details.";

/// Build the system instruction for `persona` with its memory text
pub fn system_prompt(persona: Option<&str>, memory: &str) -> String {
    match persona.filter(|p| !p.is_empty()) {
        Some(name) => format!(
            "You are roleplaying as {}, an NPC in a fantasy world. Your known memory is as follows:\n{}\nRespond in character.",
            name, memory
        ),
        None => GENERIC_SYSTEM_PROMPT.to_string(),
    }
}

/// Dispatches prompts to a completion transport
#[derive(Clone)]
pub struct CompletionDispatcher {
    transport: Arc<dyn CompletionTransport>,
    notifier: Arc<dyn Notifier>,
}

impl CompletionDispatcher {
    pub fn new(transport: Arc<dyn CompletionTransport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    /// Send `prompt` once and classify the result.
    ///
    /// `prompt` must already be trimmed and non-empty.
    pub async fn dispatch(
        &self,
        settings: &AssistantSettings,
        prompt: &str,
        persona: Option<&str>,
        memory: &str,
    ) -> DispatchOutcome {
        if !settings.has_api_key() {
            warn!("Dispatch skipped: no API key configured");
            self.notifier.warn(MISSING_KEY_NOTICE);
            return DispatchOutcome::MissingCredential;
        }

        let request = CompletionRequest {
            model: settings.model,
            system_prompt: system_prompt(persona, memory),
            user_prompt: prompt.to_string(),
            api_key: settings.api_key.clone(),
        };

        debug!(
            provider = %self.transport.provider_name(),
            model = %request.model,
            persona = ?persona,
            prompt_len = prompt.len(),
            "Dispatching completion"
        );

        match self.transport.complete(&request).await {
            Ok(content) => match content.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => DispatchOutcome::Reply(text.to_string()),
                _ => {
                    debug!(model = %request.model, "Completion returned no text");
                    DispatchOutcome::Empty
                }
            },
            Err(e) => {
                error!(
                    provider = %self.transport.provider_name(),
                    error = %e,
                    "Completion API error"
                );
                self.notifier.error(API_ERROR_NOTICE);
                DispatchOutcome::Failed
            }
        }
    }

    /// Same as [`dispatch`](Self::dispatch), returning the displayable text
    pub async fn dispatch_text(
        &self,
        settings: &AssistantSettings,
        prompt: &str,
        persona: Option<&str>,
        memory: &str,
    ) -> String {
        self.dispatch(settings, prompt, persona, memory)
            .await
            .into_text()
    }
}
