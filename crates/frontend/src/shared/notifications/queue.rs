#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice--success",
            NoticeKind::Warning => "notice--warning",
            NoticeKind::Error => "notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    /// Expiry in milliseconds, browser clock
    pub expires_at: f64,
}

/// Notice queue, free of DOM and timers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    entries: Vec<Notice>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, ttl_ms: u32, now: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notice {
            id,
            kind,
            message: message.into(),
            expires_at: now + f64::from(ttl_ms),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    /// Removes expired notices, returns how many were dropped
    pub fn prune(&mut self, now: f64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now);
        before - self.entries.len()
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut q = NotificationQueue::new();
        let a = q.push(NoticeKind::Success, "ok", 1000, 0.0);
        let b = q.push(NoticeKind::Error, "fail", 1000, 0.0);
        assert!(b > a);
        assert_eq!(q.entries()[0].message, "ok");
        assert_eq!(q.entries()[1].kind, NoticeKind::Error);
    }

    #[test]
    fn test_notice_expires_after_ttl() {
        let mut q = NotificationQueue::new();
        q.push(NoticeKind::Success, "short", 1000, 0.0);
        q.push(NoticeKind::Warning, "long", 5000, 0.0);

        assert_eq!(q.prune(999.0), 0);
        assert_eq!(q.prune(1000.0), 1);
        assert_eq!(q.entries().len(), 1);
        assert_eq!(q.entries()[0].message, "long");

        q.prune(5000.0);
        assert!(q.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut q = NotificationQueue::new();
        let id = q.push(NoticeKind::Warning, "x", 1000, 0.0);
        q.dismiss(id);
        assert!(q.is_empty());
    }
}
