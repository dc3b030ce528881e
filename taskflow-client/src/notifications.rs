/// Recorded toast notifications
///
/// Pages push notices here; rendering them is someone else's job.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    notices: Vec<Notice>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        tracing::debug!(?kind, message = %message, "Notice");
        self.notices.push(Notice {
            kind,
            message,
            at: Utc::now(),
        });
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn all(&self) -> &[Notice] {
        &self.notices
    }

    /// Messages in order, for quick assertions and logs
    pub fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.message.as_str()).collect()
    }

    /// Takes every pending notice, leaving the feed empty
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
