//! Notifier that turns notices into tracing events

use tracing::{error, info, warn};

use crate::domain::NoticeLevel;
use crate::ports::Notifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => info!(notice = %message, "Notice"),
            NoticeLevel::Warn => warn!(notice = %message, "Notice"),
            NoticeLevel::Error => error!(notice = %message, "Notice"),
        }
    }
}
