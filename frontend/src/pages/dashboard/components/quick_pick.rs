use crate::{components::layout::Card, pages::leave_request::LeaveType};
use leptos::*;

pub const QUICK_PICK_TYPES: [LeaveType; 3] =
    [LeaveType::Annual, LeaveType::Sick, LeaveType::Personal];

/// Radio list that opens the leave form with the picked type.
#[component]
pub fn QuickPick(
    #[prop(into)] selected: Signal<Option<LeaveType>>,
    on_pick: Callback<LeaveType>,
) -> impl IntoView {
    view! {
        <Card>
            <h3 class="font-semibold text-gray-900 mb-4">{"Apply Leave"}</h3>
            <div class="space-y-3" role="radiogroup">
                {QUICK_PICK_TYPES
                    .into_iter()
                    .map(|kind| {
                        let id = format!("quick-pick-{}", kind.as_str().to_ascii_lowercase());
                        view! {
                            <div class="flex items-center space-x-2">
                                <input
                                    type="radio"
                                    name="quick-pick"
                                    id=id.clone()
                                    value=kind.as_str()
                                    prop:checked=move || selected.get() == Some(kind)
                                    on:change=move |_| on_pick.call(kind)
                                />
                                <label for=id class="cursor-pointer text-sm text-gray-800">
                                    {kind.label()}
                                </label>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}
