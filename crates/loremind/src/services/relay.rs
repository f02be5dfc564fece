//! Chat Relay - Panel and chat-command entry points
//!
//! Ties the memory store, the dispatcher and the host's chat sink together:
//! posts the question, dispatches it and posts the reply.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    AssistantSettings, ChatPost, DispatchOutcome, Speaker, MEMORY_FOLDER,
};
use crate::ports::{ChatSink, MemoryStore};
use crate::services::chat_command::{parse_chat_command, ChatCommand};
use crate::services::dispatcher::CompletionDispatcher;
use crate::services::memory_resolver::resolve_memory;

const QUESTION_HEADING: &str = "You asked ChatGPT:";
const REPLY_HEADING: &str = "ChatGPT:";

/// What happened to a chat line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatLineOutcome {
    /// Ordinary chat; the host should deliver it as usual
    PassThrough,
    /// Consumed by the assistant, with the reply text when one was produced
    Handled(Option<String>),
}

#[derive(Clone)]
pub struct ChatRelay {
    store: Arc<dyn MemoryStore>,
    dispatcher: CompletionDispatcher,
    sink: Arc<dyn ChatSink>,
}

impl ChatRelay {
    pub fn new(
        store: Arc<dyn MemoryStore>,
        dispatcher: CompletionDispatcher,
        sink: Arc<dyn ChatSink>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            sink,
        }
    }

    /// Persona names offered by the NPC selector
    pub fn personas(&self) -> Vec<String> {
        self.store.names_in(MEMORY_FOLDER)
    }

    /// Resolve memory and dispatch without posting anything.
    ///
    /// Returns `None` for blank prompts.
    pub async fn ask(
        &self,
        settings: &AssistantSettings,
        prompt: &str,
        persona: Option<&str>,
    ) -> Option<DispatchOutcome> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }
        let persona = persona.filter(|p| !p.is_empty());
        let memory = resolve_memory(persona, self.store.as_ref());
        Some(
            self.dispatcher
                .dispatch(settings, prompt, persona, &memory)
                .await,
        )
    }

    /// Panel submit: post the question, dispatch, post the reply.
    ///
    /// Returns the reply text for the panel's output area, or `None` when
    /// the query was blank.
    pub async fn submit_panel(
        &self,
        settings: &AssistantSettings,
        asker: &str,
        query: &str,
        persona: Option<&str>,
    ) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let visibility = settings.post_visibility();

        self.publish(
            ChatPost::new(Speaker::User(asker.to_string()), query, visibility)
                .with_heading(QUESTION_HEADING),
        )
        .await;

        let reply = self.ask(settings, query, persona).await?.into_text();
        info!(asker = %asker, persona = ?persona, "Panel query answered");

        self.publish(ChatPost::new(Speaker::Assistant, reply.clone(), visibility))
            .await;

        Some(reply)
    }

    /// Chat input hook: answers `/gpt` lines, passes everything else through
    pub async fn handle_chat_line(
        &self,
        settings: &AssistantSettings,
        line: &str,
    ) -> ChatLineOutcome {
        match parse_chat_command(line) {
            None => ChatLineOutcome::PassThrough,
            Some(ChatCommand::Blank) => {
                debug!("Ignoring /gpt without a prompt");
                ChatLineOutcome::Handled(None)
            }
            Some(ChatCommand::Ask { prompt }) => {
                let reply = self
                    .dispatcher
                    .dispatch_text(settings, &prompt, None, "")
                    .await;

                self.publish(
                    ChatPost::new(Speaker::Assistant, reply.clone(), settings.post_visibility())
                        .with_heading(REPLY_HEADING),
                )
                .await;

                ChatLineOutcome::Handled(Some(reply))
            }
        }
    }

    async fn publish(&self, post: ChatPost) {
        let post_id = post.id;
        if let Err(e) = self.sink.post(post).await {
            warn!(sink = %self.sink.name(), post_id = %post_id, error = %e, "Failed to post chat message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryJournal;
    use crate::domain::{MemoryDocument, MemoryPage, Visibility, EMPTY_REPLY, NO_API_KEY_REPLY};
    use crate::test_support::{RecordingNotifier, RecordingSink, ScriptedTransport};

    struct Fixture {
        relay: ChatRelay,
        transport: Arc<ScriptedTransport>,
        sink: Arc<RecordingSink>,
    }

    fn fixture(transport: ScriptedTransport) -> Fixture {
        let journal = InMemoryJournal::with_documents(vec![
            MemoryDocument::new("Jaaris", MEMORY_FOLDER)
                .with_page(MemoryPage::new("Origin", "Born in the north.")),
            MemoryDocument::new("Helper", MEMORY_FOLDER)
                .with_page(MemoryPage::new("Guide", "Explains memory journals.")),
        ]);
        let transport = Arc::new(transport);
        let sink = Arc::new(RecordingSink::default());
        let dispatcher =
            CompletionDispatcher::new(transport.clone(), Arc::new(RecordingNotifier::default()));
        let relay = ChatRelay::new(Arc::new(journal), dispatcher, sink.clone());
        Fixture {
            relay,
            transport,
            sink,
        }
    }

    fn settings() -> AssistantSettings {
        AssistantSettings::default().with_api_key("sk-test")
    }

    #[tokio::test]
    async fn test_personas_list_memory_folder() {
        let f = fixture(ScriptedTransport::reply("x"));
        assert_eq!(f.relay.personas(), vec!["Jaaris", "Helper"]);
    }

    #[tokio::test]
    async fn test_panel_posts_question_and_reply() {
        let f = fixture(ScriptedTransport::reply("  I hail from the north.  "));

        let reply = f
            .relay
            .submit_panel(&settings(), "Ana", "  Where are you from? ", Some("Jaaris"))
            .await;

        assert_eq!(reply.as_deref(), Some("I hail from the north."));
        let posts = f.sink.posts();
        assert_eq!(posts.len(), 2);

        assert_eq!(posts[0].speaker, Speaker::User("Ana".to_string()));
        assert_eq!(posts[0].heading.as_deref(), Some(QUESTION_HEADING));
        assert_eq!(posts[0].body, "Where are you from?");
        assert_eq!(posts[0].visibility, Visibility::GmOnly);

        assert_eq!(posts[1].speaker, Speaker::Assistant);
        assert_eq!(posts[1].body, "I hail from the north.");
        assert_eq!(posts[1].visibility, Visibility::GmOnly);

        let request = f.transport.last_request().unwrap();
        assert!(request.system_prompt.contains("Born in the north."));
        assert_eq!(request.user_prompt, "Where are you from?");
    }

    #[tokio::test]
    async fn test_panel_public_when_whisper_disabled() {
        let f = fixture(ScriptedTransport::reply("Hi"));
        let settings = settings().with_whisper_to_gm(false);

        f.relay.submit_panel(&settings, "Ana", "Hello", None).await;

        assert!(f
            .sink
            .posts()
            .iter()
            .all(|p| p.visibility == Visibility::Public));
    }

    #[tokio::test]
    async fn test_blank_panel_query_does_nothing() {
        let f = fixture(ScriptedTransport::reply("unused"));

        let reply = f.relay.submit_panel(&settings(), "Ana", "   ", None).await;

        assert_eq!(reply, None);
        assert!(f.sink.posts().is_empty());
        assert_eq!(f.transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_panel_without_key_posts_sentinel() {
        let f = fixture(ScriptedTransport::reply("unused"));

        let reply = f
            .relay
            .submit_panel(&AssistantSettings::default(), "Ana", "Hello", None)
            .await;

        assert_eq!(reply.as_deref(), Some(NO_API_KEY_REPLY));
        assert_eq!(f.sink.posts()[1].body, NO_API_KEY_REPLY);
        assert_eq!(f.transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_chat_line_pass_through() {
        let f = fixture(ScriptedTransport::reply("unused"));

        let outcome = f.relay.handle_chat_line(&settings(), "hello table").await;

        assert_eq!(outcome, ChatLineOutcome::PassThrough);
        assert_eq!(f.transport.calls(), 0);
        assert!(f.sink.posts().is_empty());
    }

    #[tokio::test]
    async fn test_chat_command_answers_without_persona() {
        let f = fixture(ScriptedTransport::no_content());

        let outcome = f
            .relay
            .handle_chat_line(&settings(), "/gpt Jaaris, who are you?")
            .await;

        assert_eq!(outcome, ChatLineOutcome::Handled(Some(EMPTY_REPLY.to_string())));
        let request = f.transport.last_request().unwrap();
        assert_eq!(request.user_prompt, "Jaaris, who are you?");
        assert!(!request.system_prompt.contains("Born in the north."));

        let posts = f.sink.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].heading.as_deref(), Some(REPLY_HEADING));
        assert_eq!(posts[0].body, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_blank_chat_command_is_swallowed() {
        let f = fixture(ScriptedTransport::reply("unused"));

        let outcome = f.relay.handle_chat_line(&settings(), "/gpt   ").await;

        assert_eq!(outcome, ChatLineOutcome::Handled(None));
        assert_eq!(f.transport.calls(), 0);
        assert!(f.sink.posts().is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_abort_exchange() {
        let f = fixture(ScriptedTransport::reply("Still here"));
        f.sink.fail_posts();

        let reply = f.relay.submit_panel(&settings(), "Ana", "Ping", None).await;

        assert_eq!(reply.as_deref(), Some("Still here"));
        assert_eq!(f.transport.calls(), 1);
    }
}
