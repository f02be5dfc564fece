//! Notifier Port
//!
//! User-facing notice channel (toast, terminal line, log event).

use crate::domain::NoticeLevel;

pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.notify(NoticeLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}
