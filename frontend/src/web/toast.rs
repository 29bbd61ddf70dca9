//! Toast 通知
//!
//! [`Notifier`] that pushes into a signal-backed stack. Each toast removes
//! itself after the configured timeout.

use edutech::{Notification, NotificationLevel, Notifier};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl ToastNotifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let Some(id) = self.next_id.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };

        let _ = self
            .toasts
            .try_update(|list| list.push(Toast { id, notification }));

        let this = *self;
        Timeout::new(self.timeout_ms, move || this.dismiss(id)).forget();
    }
}

fn alert_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "alert alert-success shadow-lg",
        NotificationLevel::Error => "alert alert-error shadow-lg",
        NotificationLevel::Info => "alert alert-info shadow-lg",
    }
}

/// Renders the notifier found in context.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || notifier.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=alert_class(toast.notification.level)
                            on:click=move |_| notifier.dismiss(id)
                        >
                            <span>{toast.notification.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
