use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A user-visible notification produced by a panel.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub detail: Option<String>,
    pub kind: NoticeKind,
    pub created: Instant,
    pub duration: Duration,
}

impl Notice {
    pub fn new(title: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            title: title.into(),
            detail: None,
            kind,
            created: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= self.duration
    }
}

#[derive(Default, Debug)]
pub struct Notices {
    queue: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        self.queue.push(notice);
    }

    pub fn info(&mut self, title: impl Into<String>) {
        self.push(Notice::new(title, NoticeKind::Info));
    }

    pub fn warning(&mut self, title: impl Into<String>) {
        self.push(Notice::new(title, NoticeKind::Warning));
    }

    pub fn error(&mut self, title: impl Into<String>) {
        self.push(Notice::new(title, NoticeKind::Error));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.queue.iter().filter(|notice| notice.kind == kind).count()
    }

    pub fn clear_finished(&mut self, now: Instant) {
        self.queue.retain(|notice| !notice.is_expired(now));
    }
}
