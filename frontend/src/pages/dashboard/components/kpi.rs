use crate::{components::layout::Card, pages::dashboard::repository::Kpi};
use leptos::*;

#[component]
pub fn KpiCards(kpis: Vec<Kpi>, on_apply: Callback<()>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-5 gap-4">
            {kpis
                .into_iter()
                .map(|kpi| {
                    view! {
                        <Card>
                            <p class="text-sm text-gray-500 mb-1">{kpi.label}</p>
                            <h2 class="text-3xl font-bold text-gray-900">{kpi.value}</h2>
                        </Card>
                    }
                })
                .collect_view()}
            <Card class="flex items-center justify-between">
                <p class="text-sm text-gray-500">{"Apply Leave"}</p>
                <button
                    type="button"
                    class="px-4 py-2 rounded bg-blue-600 text-white text-sm font-medium hover:bg-blue-700"
                    on:click=move |_| on_apply.call(())
                >
                    {"Apply"}
                </button>
            </Card>
        </div>
    }
}
