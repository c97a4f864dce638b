use std::time::Duration;

use crate::domain::{Notice, NoticeLevel};

/// Holds the single notice a panel is showing. A new notice replaces the
/// previous one; each hides itself after the configured duration.
#[derive(Debug)]
pub struct NoticeBoard {
    current: Option<Notice>,
    duration: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NoticeBoard {
    /// Creates a board whose notices last `duration`.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Shows `notice`, replacing any current one.
    pub fn show(&mut self, notice: Notice) {
        let mut notice = notice.with_duration(self.duration);
        notice.mark_displayed();
        self.current = Some(notice);
    }

    /// Shows a success notice.
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(Notice::new(NoticeLevel::Success, message));
    }

    /// Shows an error notice.
    pub fn error(&mut self, message: impl Into<String>) {
        self.show(Notice::new(NoticeLevel::Error, message));
    }

    /// Hides the current notice once it has expired.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notice::is_expired) {
            self.current = None;
        }
    }

    /// Returns the notice being shown.
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
