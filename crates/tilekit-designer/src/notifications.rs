//! Transient user notices (save/load/export feedback).

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "OK"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERR"),
        }
    }
}

/// A single notice
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub posted_at: Instant,
}

impl Notice {
    /// Get formatted notice
    pub fn formatted(&self) -> String {
        format!("[{}] {}", self.level, self.text)
    }
}

/// Notices that dismiss themselves after a fixed lifetime.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    lifetime: Duration,
}

impl NoticeBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            notices: VecDeque::new(),
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn post(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.post_at(level, text, Instant::now());
    }

    /// Posts a notice, dropping any that expired before `now`.
    pub fn post_at(&mut self, level: NoticeLevel, text: impl Into<String>, now: Instant) {
        self.prune_at(now);
        let notice = Notice {
            level,
            text: text.into(),
            posted_at: now,
        };
        tracing::debug!(notice = %notice.formatted(), "Posted notice");
        self.notices.push_back(notice);
    }

    /// Drops notices older than the lifetime.
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.notices
            .retain(|notice| now.saturating_duration_since(notice.posted_at) < lifetime);
    }

    /// Notices still visible at `now`, oldest first.
    pub fn visible_at(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices
            .iter()
            .filter(move |notice| now.saturating_duration_since(notice.posted_at) < self.lifetime)
    }

    /// All notices not yet pruned, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_expire() {
        let mut board = NoticeBoard::default();
        let start = Instant::now();
        board.post_at(NoticeLevel::Success, "Design saved successfully!", start);
        board.post_at(
            NoticeLevel::Warning,
            "No saved design found",
            start + Duration::from_millis(2000),
        );

        let later = start + Duration::from_millis(3500);
        assert_eq!(board.visible_at(later).count(), 1);
        board.prune_at(later);
        assert_eq!(board.len(), 1);
        assert_eq!(board.latest().unwrap().text, "No saved design found");

        board.prune_at(start + Duration::from_secs(10));
        assert!(board.is_empty());
    }

    #[test]
    fn test_post_drops_expired_notices() {
        let mut board = NoticeBoard::new(Duration::from_millis(100));
        let start = Instant::now();
        for i in 0..20u64 {
            board.post_at(
                NoticeLevel::Info,
                format!("notice {i}"),
                start + Duration::from_millis(i * 200),
            );
        }
        assert_eq!(board.len(), 1);
        assert_eq!(board.latest().unwrap().text, "notice 19");
    }

    #[test]
    fn test_formatted() {
        let mut board = NoticeBoard::default();
        board.post(NoticeLevel::Error, "Error loading design");
        assert_eq!(
            board.latest().unwrap().formatted(),
            "[ERR] Error loading design"
        );
    }
}
