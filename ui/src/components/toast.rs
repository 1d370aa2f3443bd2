//! Toast notification surface
//!
//! [`Toasts`] is provided as context and implements the domain `Notifier`,
//! so the editor reports into it without knowing how toasts are drawn.

use audience::domain::{Notifier, Severity};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::types::UiConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
    position: RwSignal<String>,
    auto_close_ms: RwSignal<u64>,
}

impl Toasts {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            position: RwSignal::new(config.toast_position.clone()),
            auto_close_ms: RwSignal::new(config.toast_auto_close_ms),
        }
    }

    pub fn configure(&self, config: &UiConfig) {
        self.position.set(config.toast_position.clone());
        self.auto_close_ms.set(config.toast_auto_close_ms);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, severity: Severity, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                severity,
                message: message.to_string(),
            })
        });

        let toasts = *self;
        let delay = u32::try_from(self.auto_close_ms.get_untracked()).unwrap_or(u32::MAX);
        Timeout::new(delay, move || toasts.dismiss(id)).forget();
    }
}

/// Renders the toasts held in context. Click a toast to dismiss it early.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class=move || format!("toast_container {}", toasts.position.get())>
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast_{}", toast.severity.as_str())
                            role="alert"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
