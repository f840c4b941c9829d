use crate::shared::icons::icon;
use contracts::shared::notification::{
    Severity, Toast, ToastPhase, ToastQueue, AUTO_DISMISS_MS, DETACH_DELAY_MS, REVEAL_DELAY_MS,
};
use leptos::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

/// Toast notifications shared through context.
///
/// State lives in a `ToastQueue`; this service only schedules its
/// transitions. The auto-dismiss timer is the one cancelable timer on the
/// page: closing a toast by hand clears it.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<ToastQueue>,
    auto_dismiss: StoredValue<HashMap<u64, TimeoutHandle>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
            auto_dismiss: StoredValue::new(HashMap::new()),
        }
    }

    /// Append a toast, reveal it shortly after and schedule its removal.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, severity));

        let svc = *self;
        set_timeout(
            move || {
                svc.queue.update(|q| {
                    q.reveal(id);
                })
            },
            millis(REVEAL_DELAY_MS),
        );

        match set_timeout_with_handle(move || svc.dismiss(id), millis(AUTO_DISMISS_MS)) {
            Ok(handle) => self.auto_dismiss.update_value(|timers| {
                timers.insert(id, handle);
            }),
            Err(err) => log::warn!("could not schedule toast auto-dismiss: {:?}", err),
        }
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Error)
    }

    /// Close button handler.
    pub fn close(&self, id: u64) {
        let mut pending = None;
        self.auto_dismiss.update_value(|timers| pending = timers.remove(&id));
        if let Some(handle) = pending {
            handle.clear();
        }
        self.dismiss(id);
    }

    /// Transition out, then detach. Repeated calls for the same toast
    /// schedule at most one detach.
    fn dismiss(&self, id: u64) {
        self.auto_dismiss.update_value(|timers| {
            timers.remove(&id);
        });

        let mut started = false;
        self.queue.update(|q| started = q.begin_dismiss(id));
        if !started {
            return;
        }

        let svc = *self;
        set_timeout(
            move || {
                svc.queue.update(|q| {
                    q.detach(id);
                })
            },
            millis(DETACH_DELAY_MS),
        );
    }

    fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    fn is_visible(&self, id: u64) -> bool {
        self.queue.with(|q| q.phase(id) == Some(ToastPhase::Visible))
    }
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

/// Renders the toast stack. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div class="notification-stack">
            <For
                each=move || svc.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() class:show=move || svc.is_visible(id)>
                            <div class="notification-content">
                                {icon(toast.severity.icon())}
                                <span>{toast.message.clone()}</span>
                                <button
                                    class="notification-close"
                                    aria-label="Fechar"
                                    on:click=move |_| svc.close(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
