use serde::{Deserialize, Serialize};

pub const HEART_FOUND_TEXT: &str = "You found a Heart! <3";
pub const LOCKED_TEXT: &str = "Locked! You need a Heart.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Sign,
    Locked,
    HeartFound,
    Note,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: MessageKind,
    pub text: String,
    pub expires_at: Option<u64>, // Tick after which it disappears; `None` stays until replaced.
}

/// Holds at most one message. Showing a new one replaces the old one along
/// with its expiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBox {
    active: Option<Notification>,
}

impl MessageBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>, duration: Option<u64>, now: u64) {
        self.active = Some(Notification {
            kind,
            text: text.into(),
            expires_at: duration.map(|ticks| now + ticks),
        });
    }

    pub fn hide(&mut self) {
        self.active = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref()
    }

    pub fn is_showing(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_showing_kind(&self, kind: MessageKind) -> bool {
        self.active.as_ref().is_some_and(|n| n.kind == kind)
    }

    pub fn expire(&mut self, now: u64) {
        if self
            .active
            .as_ref()
            .and_then(|n| n.expires_at)
            .is_some_and(|expires_at| now >= expires_at)
        {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_message_disappears_at_its_expiry() {
        let mut messages = MessageBox::new();
        messages.show(MessageKind::HeartFound, HEART_FOUND_TEXT, Some(180), 10);

        messages.expire(189);
        assert!(messages.is_showing());
        messages.expire(190);
        assert!(!messages.is_showing());
    }

    #[test]
    fn untimed_message_stays() {
        let mut messages = MessageBox::new();
        messages.show(MessageKind::Locked, LOCKED_TEXT, None, 0);
        messages.expire(u64::MAX);
        assert!(messages.is_showing_kind(MessageKind::Locked));
    }

    #[test]
    fn new_message_supersedes_the_old_timer() {
        let mut messages = MessageBox::new();
        messages.show(MessageKind::HeartFound, HEART_FOUND_TEXT, Some(10), 0);
        messages.show(MessageKind::Locked, LOCKED_TEXT, None, 5);

        // The heart message's timer would have fired here.
        messages.expire(10);

        let current = messages.current().expect("locked message should remain");
        assert_eq!(current.text, LOCKED_TEXT);
        assert_eq!(current.expires_at, None);
    }
}
