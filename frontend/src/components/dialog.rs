use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal shell: backdrop, title bar and Escape handling. Every dismissal path
/// goes through `on_dismiss`; the caller owns `is_open`.
#[component]
pub fn ModalDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_dismiss: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title_text = Signal::derive(move || title.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| on_dismiss.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-lg rounded-lg bg-white shadow-xl border border-gray-200 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_dismiss.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-gray-900">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-gray-500 hover:text-gray-900"
                            on:click=move |_| on_dismiss.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
