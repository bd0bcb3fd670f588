use crate::{api::ApiClient, state::notifications::provide_notifier};
use leptos::*;

/// Base URL nothing listens on; views rendered in tests must not reach it.
pub const OFFLINE_API_BASE_URL: &str = "http://127.0.0.1:9/api";

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` with an offline API client and a notifier in context.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_context(ApiClient::new_with_base_url(OFFLINE_API_BASE_URL));
        provide_notifier();
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Escapes `text` the way SSR output escapes text nodes.
pub fn escaped(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
}
