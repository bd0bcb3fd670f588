use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(
    on_sign_out: Callback<()>,
    #[prop(into)] sign_out_pending: Signal<bool>,
    #[prop(into)] signed_in_as: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout>
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{"Leave Management Reports"}</h1>
                    <p class="text-sm text-gray-500 mt-1">
                        {"Comprehensive overview of employee leave statistics and trends"}
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    {move || {
                        signed_in_as
                            .get()
                            .map(|name| {
                                view! {
                                    <span class="text-sm text-gray-600">
                                        {format!("Signed in as {name}")}
                                    </span>
                                }
                            })
                    }}
                    <button
                        type="button"
                        class="px-4 py-2 rounded border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-100 disabled:opacity-50"
                        disabled=move || sign_out_pending.get()
                        on:click=move |_| on_sign_out.call(())
                    >
                        {"Sign Out"}
                    </button>
                </div>
            </div>
            {children()}
        </Layout>
    }
}
