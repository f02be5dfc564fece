//! Terminal chat sink and notifier

use async_trait::async_trait;
use colored::Colorize;
use loremind::{ChatPost, ChatSink, DomainError, NoticeLevel, Notifier, Speaker, Visibility};

/// Prints chat posts to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink {
    plain: bool,
}

impl TerminalSink {
    /// `plain` disables colors (for pipes and logs)
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }
}

/// Plain-text rendering of a post, without colors
pub fn render_plain(post: &ChatPost) -> String {
    let whisper = match post.visibility {
        Visibility::GmOnly => "[GM] ",
        Visibility::Public => "",
    };
    match &post.heading {
        Some(heading) => format!("{}{}: {} {}", whisper, post.speaker.display_name(), heading, post.body),
        None => format!("{}{}: {}", whisper, post.speaker.display_name(), post.body),
    }
}

#[async_trait]
impl ChatSink for TerminalSink {
    async fn post(&self, post: ChatPost) -> Result<(), DomainError> {
        if self.plain {
            println!("{}", render_plain(&post));
            return Ok(());
        }

        let whisper = match post.visibility {
            Visibility::GmOnly => format!("{} ", "[GM]".magenta()),
            Visibility::Public => String::new(),
        };
        let speaker = match &post.speaker {
            Speaker::Assistant => post.speaker.display_name().green().bold(),
            Speaker::User(name) => name.cyan().bold(),
        };
        let heading = post
            .heading
            .as_deref()
            .map(|h| format!("{} ", h.bold()))
            .unwrap_or_default();

        println!("{}{}: {}{}", whisper, speaker, heading, post.body);
        Ok(())
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

/// Prints notices to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => eprintln!("{} {}", "ℹ".blue(), message),
            NoticeLevel::Warn => eprintln!("{} {}", "⚠".yellow(), message.yellow()),
            NoticeLevel::Error => eprintln!("{} {}", "✗".red(), message.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_whispered_question() {
        let post = ChatPost::new(Speaker::User("Ana".into()), "Who rules?", Visibility::GmOnly)
            .with_heading("You asked ChatGPT:");
        assert_eq!(render_plain(&post), "[GM] Ana: You asked ChatGPT: Who rules?");
    }

    #[test]
    fn test_render_public_reply() {
        let post = ChatPost::new(Speaker::Assistant, "The crown.", Visibility::Public);
        assert_eq!(render_plain(&post), "ChatGPT: The crown.");
    }
}
