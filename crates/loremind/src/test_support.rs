//! Fakes for the ports, shared by unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{errors::DomainError, ChatPost, CompletionRequest, NoticeLevel};
use crate::ports::{ChatSink, CompletionTransport, Notifier};

enum Script {
    Content(Option<String>),
    Fail(String),
}

/// Transport returning a fixed result and recording every request
pub struct ScriptedTransport {
    script: Script,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedTransport {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(content: &str) -> Self {
        Self::new(Script::Content(Some(content.to_string())))
    }

    pub fn no_content() -> Self {
        Self::new(Script::Content(None))
    }

    pub fn failing(reason: &str) -> Self {
        Self::new(Script::Fail(reason.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionTransport for ScriptedTransport {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Content(content) => Ok(content.clone()),
            Script::Fail(reason) => Err(DomainError::ExternalService(reason.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices.lock().unwrap().iter().map(|(l, _)| *l).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.lock().unwrap().push((level, message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingSink {
    posts: Mutex<Vec<ChatPost>>,
    failing: AtomicBool,
}

impl RecordingSink {
    pub fn posts(&self) -> Vec<ChatPost> {
        self.posts.lock().unwrap().clone()
    }

    pub fn fail_posts(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatSink for RecordingSink {
    async fn post(&self, post: ChatPost) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::ExternalService("chat offline".to_string()));
        }
        self.posts.lock().unwrap().push(post);
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
