use leptos::{html, *};

pub const NO_FILE_LABEL: &str = "Choose File";

/// Hidden file input fronted by a button. The button shows the chosen file's
/// name once there is one.
#[component]
pub fn FilePicker(
    #[prop(into)] selected_name: Signal<Option<String>>,
    on_select: Callback<web_sys::File>,
    #[prop(optional, into)] accept: Option<String>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let open_chooser = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_select.call(file);
        }
        // Lets the same file be picked again after the draft was discarded.
        input.set_value("");
    };

    view! {
        <div class="mt-1 flex items-center gap-2">
            <input
                type="file"
                class="hidden"
                accept=accept
                node_ref=input_ref
                on:change=on_change
            />
            <button
                type="button"
                class="px-3 py-1 rounded border border-gray-300 text-sm text-gray-700 hover:bg-gray-50"
                on:click=open_chooser
            >
                {move || selected_name.get().unwrap_or_else(|| NO_FILE_LABEL.to_string())}
            </button>
        </div>
    }
}
