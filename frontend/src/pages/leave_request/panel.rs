use super::{
    view_model::LeaveRequestViewModel,
    workflow::{Attachment, FieldEdit, LeaveType},
};
use crate::components::{dialog::ModalDialog, file_picker::FilePicker};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full border rounded px-2 py-1";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";

/// Leave request form shown in a modal. Visibility and the preselected leave
/// type / attachment are owned by the host page.
#[component]
pub fn ApplyLeaveModal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] initial_leave_type: MaybeSignal<Option<LeaveType>>,
    #[prop(optional, into)] initial_attachment: MaybeSignal<Option<Attachment>>,
) -> impl IntoView {
    let vm = LeaveRequestViewModel::new(
        open,
        Signal::derive(move || initial_leave_type.get()),
        Signal::derive(move || initial_attachment.get()),
        on_close,
    );

    let employee_name = vm.draft_field(|d| d.employee_name.clone());
    let leave_type = vm.draft_field(|d| d.leave_type.map(|t| t.as_str()).unwrap_or(""));
    let start_date = vm.draft_field(|d| d.start_date.clone());
    let end_date = vm.draft_field(|d| d.end_date.clone());
    let reason = vm.draft_field(|d| d.reason.clone());
    let attachment_name = vm.draft_field(|d| d.attachment.as_ref().map(|a| a.name.clone()));
    let can_submit = vm.can_submit();
    let pending = vm.is_pending();
    let validation_message = vm.validation_message();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <ModalDialog
            is_open=open
            title="Apply for Leave"
            on_dismiss=Callback::new(move |_| vm.cancel())
        >
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class=LABEL_CLASS>{"Employee Name"}</label>
                    <input
                        type="text"
                        class=INPUT_CLASS
                        prop:value=move || employee_name.get()
                        on:input=move |ev| vm.edit(FieldEdit::EmployeeName(event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS>{"Leave Type"}</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || leave_type.get()
                        on:change=move |ev| {
                            vm.edit(FieldEdit::LeaveType(
                                LeaveType::from_form_value(&event_target_value(&ev)),
                            ))
                        }
                    >
                        <option value="" disabled=true selected=move || leave_type.get().is_empty()>
                            {"Select leave type"}
                        </option>
                        {LeaveType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || leave_type.get() == kind.as_str()
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class=LABEL_CLASS>{"Start Date"}</label>
                        <input
                            type="date"
                            class=INPUT_CLASS
                            prop:value=move || start_date.get()
                            on:input=move |ev| vm.edit(FieldEdit::StartDate(event_target_value(&ev)))
                        />
                    </div>
                    <div>
                        <label class=LABEL_CLASS>{"End Date"}</label>
                        <input
                            type="date"
                            class=INPUT_CLASS
                            prop:value=move || end_date.get()
                            on:input=move |ev| vm.edit(FieldEdit::EndDate(event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div>
                    <label class=LABEL_CLASS>{"Reason"}</label>
                    <textarea
                        rows=3
                        class=INPUT_CLASS
                        prop:value=move || reason.get()
                        on:input=move |ev| vm.edit(FieldEdit::Reason(event_target_value(&ev)))
                    ></textarea>
                </div>
                <div>
                    <label class=LABEL_CLASS>{"Attachment (optional)"}</label>
                    <FilePicker
                        selected_name=attachment_name
                        on_select=Callback::new(move |file| vm.select_attachment(Attachment::from_file(file)))
                    />
                </div>
                {move || {
                    validation_message
                        .get()
                        .map(|message| {
                            view! { <p class="text-sm text-red-600" role="alert">{message}</p> }
                        })
                }}
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-gray-100 text-gray-800 hover:bg-gray-200"
                        on:click=move |_| vm.cancel()
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                        disabled=move || !can_submit.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit" }}
                    </button>
                </div>
            </form>
        </ModalDialog>
    }
}
