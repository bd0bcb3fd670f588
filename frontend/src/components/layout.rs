use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 p-8">
            <main class="max-w-7xl mx-auto space-y-6">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

/// Neutral full-page placeholder shown while the session is being resolved.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <LoadingSpinner />
            <p class="text-sm text-gray-500">{"Loading..."}</p>
        </div>
    }
}

#[component]
pub fn Card(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "bg-white shadow rounded-lg p-6 {}",
        class.unwrap_or_default()
    );
    view! { <div class=class>{children()}</div> }
}
