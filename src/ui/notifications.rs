//! Toast notification surface
//!
//! Transient success/error toasts stacked in the top-right corner. Each
//! page that surfaces notifications owns its own `NotificationManager`.

use crate::core::{Toast, ToastLevel};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts shown at once
const MAX_TOASTS: usize = 5;

/// Toast with a unique id for list tracking and dismissal
#[derive(Clone, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Toast container, placed once per page
#[component]
pub fn NotificationsContainer(
    /// Signal containing the queued toasts
    toasts: RwSignal<VecDeque<ToastItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                toasts.get().into_iter().map(|item| {
                    let id = item.id;
                    let toast = item.toast.clone();

                    view! {
                        <ToastCard toast=toast id=id toasts=toasts />
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast, id: u64, toasts: RwSignal<VecDeque<ToastItem>>) -> impl IntoView {
    let (is_exiting, _set_is_exiting) = signal(false);

    // Auto-dismiss if specified
    if let Some(_ms) = toast.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                let _ = _set_is_exiting.try_set(true);
                // Wait for the exit animation before removing
                TimeoutFuture::new(300).await;
                let _ = toasts.try_update(|t| {
                    t.retain(|i| i.id != id);
                });
            });
        }
    }

    let (bg_class, border_class, icon_class) = match toast.level {
        ToastLevel::Success => ("bg-green-500/10", "border-green-500/30", "text-green-500"),
        ToastLevel::Error => ("bg-red-500/10", "border-red-500/30", "text-red-500"),
        ToastLevel::Warning => ("bg-yellow-500/10", "border-yellow-500/30", "text-yellow-500"),
        ToastLevel::Info => ("bg-blue-500/10", "border-blue-500/30", "text-blue-500"),
    };

    let icon_path = match toast.level {
        ToastLevel::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ToastLevel::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ToastLevel::Warning => {
            "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
        }
        ToastLevel::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    let message = toast.message.clone();
    let description = toast.description.clone();
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <div
            class=container_class
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <div class=icon_class>
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                </svg>
            </div>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium text-gray-800 dark:text-gray-100">{message}</h4>
                {description.map(|desc| view! {
                    <p class="text-xs text-gray-600 dark:text-gray-400 mt-0.5">{desc}</p>
                })}
            </div>
            <button
                class="text-gray-400 hover:text-gray-700 dark:hover:text-gray-200 transition-colors"
                on:click=move |_| {
                    toasts.update(|t| {
                        t.retain(|i| i.id != id);
                    });
                }
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

/// Page-local toast queue
#[derive(Clone, Copy)]
pub struct NotificationManager {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the toast signal for the container
    pub fn toasts(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.toasts
    }

    /// Queue a toast, dropping the oldest past the cap
    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push_back(ToastItem { id, toast });
            while t.len() > MAX_TOASTS {
                t.pop_front();
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Toast::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Toast::error(message));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
