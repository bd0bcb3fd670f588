use crate::pages::dashboard::{
    components::{
        DepartmentChart, KpiCards, LeaveTypeChart, MonthlyTrendChart, QuickPick,
        RecentRequestsTable,
    },
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use crate::pages::leave_request::ApplyLeaveModal;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let snapshot = vm.snapshot.get_value();

    view! {
        <DashboardFrame
            on_sign_out=Callback::new(move |_| vm.sign_out())
            sign_out_pending=vm.sign_out_pending
            signed_in_as=vm.signed_in_as()
        >
            <KpiCards kpis=snapshot.kpis on_apply=Callback::new(move |_| vm.open_modal(None)) />
            <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                <div class="lg:col-span-1">
                    <QuickPick
                        selected=vm.selected_leave_type
                        on_pick=Callback::new(move |kind| vm.open_modal(Some(kind)))
                    />
                </div>
                <div class="lg:col-span-3 space-y-6">
                    <DepartmentChart points=snapshot.departments />
                    <LeaveTypeChart shares=snapshot.leave_types />
                </div>
            </div>
            <div class="space-y-6">
                <MonthlyTrendChart points=snapshot.monthly_trend />
                <RecentRequestsTable requests=snapshot.recent_requests />
            </div>
        </DashboardFrame>
        <ApplyLeaveModal
            open=vm.modal_open
            on_close=Callback::new(move |_| vm.close_modal())
            initial_leave_type=Signal::from(vm.selected_leave_type)
            initial_attachment=Signal::from(vm.initial_attachment)
        />
    }
}
