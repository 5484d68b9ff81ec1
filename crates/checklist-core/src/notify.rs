//! Notification Presenter
//!
//! Transient messages layered above the page. Timed expiry and manual
//! dismissal both end in `dismiss`, which is a no-op once the entry is gone.

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Corner message, timed only
    Toast,
    /// Full-screen overlay, timed or dismissed by the user
    Celebration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub text: String,
    pub created_at_ms: f64,
    pub lifespan_ms: u32,
}

impl Notification {
    pub fn expires_at_ms(&self) -> f64 {
        self.created_at_ms + f64::from(self.lifespan_ms)
    }
}

#[derive(Debug, Clone)]
pub struct NotificationPresenter {
    next_id: NotificationId,
    active: Vec<Notification>,
    toast_lifespan_ms: u32,
    celebration_lifespan_ms: u32,
}

impl NotificationPresenter {
    pub fn new(toast_lifespan_ms: u32, celebration_lifespan_ms: u32) -> Self {
        Self {
            next_id: 1,
            active: Vec::new(),
            toast_lifespan_ms,
            celebration_lifespan_ms,
        }
    }

    /// Live notifications, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn celebration_active(&self) -> bool {
        self.active.iter().any(|n| n.kind == NotificationKind::Celebration)
    }

    pub fn show_toast(&mut self, text: impl Into<String>, now_ms: f64) -> Notification {
        self.push(NotificationKind::Toast, text.into(), now_ms, self.toast_lifespan_ms)
    }

    /// Returns `None` while another celebration is still showing
    pub fn show_celebration(&mut self, text: impl Into<String>, now_ms: f64) -> Option<Notification> {
        if self.celebration_active() {
            return None;
        }
        Some(self.push(
            NotificationKind::Celebration,
            text.into(),
            now_ms,
            self.celebration_lifespan_ms,
        ))
    }

    /// Remove a notification. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }

    /// Drop everything whose lifespan has elapsed at `now_ms`
    pub fn expire(&mut self, now_ms: f64) -> Vec<NotificationId> {
        let (expired, alive): (Vec<_>, Vec<_>) = self
            .active
            .drain(..)
            .partition(|n| n.expires_at_ms() <= now_ms);
        self.active = alive;
        expired.into_iter().map(|n| n.id).collect()
    }

    fn push(&mut self, kind: NotificationKind, text: String, now_ms: f64, lifespan_ms: u32) -> Notification {
        let notification = Notification {
            id: self.next_id,
            kind,
            text,
            created_at_ms: now_ms,
            lifespan_ms,
        };
        self.next_id += 1;
        self.active.push(notification.clone());
        notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_presenter() -> NotificationPresenter {
        NotificationPresenter::new(3000, 5000)
    }

    #[test]
    fn test_toast_expires_after_lifespan() {
        let mut presenter = make_presenter();
        let toast = presenter.show_toast("saved", 1000.0);
        assert_eq!(toast.lifespan_ms, 3000);

        assert!(presenter.expire(3999.0).is_empty());
        assert_eq!(presenter.expire(4000.0), vec![toast.id]);
        assert!(presenter.active().is_empty());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut presenter = make_presenter();
        let celebration = presenter.show_celebration("done", 0.0).unwrap();

        // user clicks confirm, then the timer fires
        assert!(presenter.dismiss(celebration.id));
        assert!(!presenter.dismiss(celebration.id));
        assert!(presenter.expire(10_000.0).is_empty());
    }

    #[test]
    fn test_celebrations_do_not_stack() {
        let mut presenter = make_presenter();
        let first = presenter.show_celebration("done", 0.0).unwrap();
        assert!(presenter.show_celebration("done", 10.0).is_none());
        assert_eq!(presenter.active().len(), 1);

        presenter.dismiss(first.id);
        assert!(presenter.show_celebration("done", 20.0).is_some());
    }

    #[test]
    fn test_toasts_stack_with_unique_ids() {
        let mut presenter = make_presenter();
        let a = presenter.show_toast("a", 0.0);
        let b = presenter.show_toast("b", 0.0);
        assert_ne!(a.id, b.id);
        assert_eq!(presenter.active().len(), 2);
    }
}
