//! # Notifications
//!
//! Toast-style feedback for the merchant. The editor calls exactly one of
//! [`Notifier::success`] or [`Notifier::failure`] per applied or refused
//! action, never both.

use std::cell::RefCell;

use serde::Serialize;
use tracing::{info, warn};
use ts_rs::TS;

/// Receives user-facing messages from the editor.
pub trait Notifier {
    fn success(&self, message: &str);

    fn failure(&self, message: &str);
}

/// Logs notifications instead of showing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "storedesk::notify", "{}", message);
    }

    fn failure(&self, message: &str) {
        warn!(target: "storedesk::notify", "{}", message);
    }
}

/// Whether a notice reported an applied or a refused action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// One delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Keeps every notice in delivery order.
///
/// Single-threaded, like the edit session it observes.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages_of(NoticeKind::Success)
    }

    pub fn failures(&self) -> Vec<String> {
        self.messages_of(NoticeKind::Failure)
    }

    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }

    fn messages_of(&self, kind: NoticeKind) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }

    fn record(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push(Notice {
            kind,
            message: message.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.record(NoticeKind::Success, message);
    }

    fn failure(&self, message: &str) {
        self.record(NoticeKind::Failure, message);
    }
}
