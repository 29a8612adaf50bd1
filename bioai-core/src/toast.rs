//! Transient notifications shown in the corner of every view.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn default_duration(self) -> Duration {
        let ms = match self {
            ToastKind::Success => 3000,
            ToastKind::Error => 4000,
            ToastKind::Warning => 3500,
            ToastKind::Info => 3000,
        };
        Duration::from_millis(ms)
    }

    /// CSS modifier, e.g. `toast-error`.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Warning => "toast-warning",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered, oldest first. Ids are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Unknown ids are ignored, so a timer firing after a manual dismiss is harmless.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        assert_eq!(ToastKind::Success.default_duration().as_millis(), 3000);
        assert_eq!(ToastKind::Error.default_duration().as_millis(), 4000);
        assert_eq!(ToastKind::Warning.default_duration().as_millis(), 3500);
        assert_eq!(ToastKind::Info.default_duration().as_millis(), 3000);
    }

    #[test]
    fn test_push_keeps_order_and_unique_ids() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Success, "Saved");
        let b = queue.push(ToastKind::Error, "Failed");
        assert_ne!(a, b);
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Saved", "Failed"]);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Info, "one");
        let b = queue.push(ToastKind::Warning, "two");
        queue.remove(a);
        queue.remove(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);

        queue.clear();
        assert!(queue.is_empty());
        let c = queue.push(ToastKind::Info, "three");
        assert!(c > b);
    }
}
