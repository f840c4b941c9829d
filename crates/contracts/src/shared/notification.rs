//! Toast notifications as data.
//!
//! A toast goes `Queued → Visible → Dismissing` and is then detached from
//! the queue. Each transition is only taken from the expected phase, so
//! late timers and repeated clicks are no-ops.

/// Delay before a freshly appended toast gets its "show" class.
pub const REVEAL_DELAY_MS: u32 = 100;
pub const AUTO_DISMISS_MS: u32 = 5000;
/// Length of the transition-out before the element is detached.
pub const DETACH_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
            Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }
}

/// Unrecognized names fall back to `Info`.
impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Queued,
    Visible,
    Dismissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Queued,
        });
        id
    }

    pub fn reveal(&mut self, id: u64) -> bool {
        self.transition(id, ToastPhase::Queued, ToastPhase::Visible)
    }

    /// Start the removal sequence. Returns `false` if it already started or
    /// the toast is gone, so callers schedule the detach exactly once.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase != ToastPhase::Dismissing => {
                toast.phase = ToastPhase::Dismissing;
                true
            }
            _ => false,
        }
    }

    /// Remove the toast if it is still attached.
    pub fn detach(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn phase(&self, id: u64) -> Option<ToastPhase> {
        self.get(id).map(|t| t.phase)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn transition(&mut self, id: u64, from: ToastPhase, to: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == from => {
                toast.phase = to;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parsing_and_icons() {
        assert_eq!(Severity::from("success").icon(), "check-circle");
        assert_eq!(Severity::from("error").icon(), "exclamation-circle");
        assert_eq!(Severity::from("warning").icon(), "exclamation-triangle");
        assert_eq!(Severity::from("bogus"), Severity::Info);
        assert_eq!(Severity::from("bogus").icon(), "info-circle");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_show_then_manual_close() {
        let mut queue = ToastQueue::new();
        let id = queue.push("X", Severity::Success);
        assert_eq!(
            queue.get(id).map(Toast::class).as_deref(),
            Some("notification notification-success")
        );
        assert_eq!(queue.phase(id), Some(ToastPhase::Queued));

        assert!(queue.reveal(id));
        assert_eq!(queue.phase(id), Some(ToastPhase::Visible));

        assert!(queue.begin_dismiss(id));
        // Second click while transitioning out does nothing.
        assert!(!queue.begin_dismiss(id));

        assert!(queue.detach(id));
        assert!(!queue.detach(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_auto_dismiss_after_manual_close_is_noop() {
        let mut queue = ToastQueue::new();
        let id = queue.push("X", Severity::Info);
        queue.reveal(id);
        assert!(queue.begin_dismiss(id));
        assert!(queue.detach(id));
        assert!(!queue.begin_dismiss(id));
    }

    #[test]
    fn test_late_reveal_does_not_resurrect() {
        let mut queue = ToastQueue::new();
        let id = queue.push("X", Severity::Warning);
        assert!(queue.begin_dismiss(id));
        assert!(!queue.reveal(id));
        assert_eq!(queue.phase(id), Some(ToastPhase::Dismissing));
    }

    #[test]
    fn test_ids_are_unique_and_independent() {
        let mut queue = ToastQueue::new();
        let a = queue.push("a", Severity::Info);
        let b = queue.push("b", Severity::Error);
        assert_ne!(a, b);
        queue.begin_dismiss(a);
        queue.detach(a);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.phase(b), Some(ToastPhase::Queued));
        assert!(queue.detach(b));
        // Ids keep increasing after the queue empties.
        assert!(queue.push("c", Severity::Info) > b);
    }
}
