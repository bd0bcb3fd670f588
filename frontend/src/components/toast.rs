use crate::state::notifications::{use_notifier, Notification, NotificationLevel, Notifier};
use leptos::*;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[component]
pub fn ToastViewport() -> impl IntoView {
    let notifier = use_notifier();
    let entries = notifier.entries();
    view! {
        <div class="fixed top-4 right-4 z-[80] space-y-2" aria-live="polite">
            <For
                each=move || entries.get()
                key=|entry| entry.id
                children=move |entry| view! { <Toast notification=entry notifier=notifier /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification, notifier: Notifier) -> impl IntoView {
    let id = notification.id;
    create_effect(move |_| {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            notifier.dismiss(id);
        });
    });
    let class = match notification.level {
        NotificationLevel::Success => {
            "flex items-start gap-3 rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-800 shadow"
        }
        NotificationLevel::Error => {
            "flex items-start gap-3 rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-800 shadow"
        }
    };
    view! {
        <div class=class role="status">
            <span class="flex-1">{notification.message}</span>
            <button
                type="button"
                aria-label="Dismiss"
                class="opacity-60 hover:opacity-100"
                on:click=move |_| notifier.dismiss(id)
            >
                {"✕"}
            </button>
        </div>
    }
}
