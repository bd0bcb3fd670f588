use crate::{components::layout::Card, pages::dashboard::repository::RecentRequest};
use leptos::*;

const HEAD_CLASS: &str = "px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase";
const CELL_CLASS: &str = "px-4 py-2 text-sm text-gray-500";

#[component]
pub fn RecentRequestsTable(requests: Vec<RecentRequest>) -> impl IntoView {
    view! {
        <Card>
            <div class="mb-6">
                <h3 class="font-semibold text-gray-900">{"Recent Leave Requests"}</h3>
                <p class="text-sm text-gray-500">
                    {"Complete overview of all leave requests and their status"}
                </p>
            </div>
            <div class="rounded-md border overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead>
                        <tr>
                            <th class=HEAD_CLASS>{"Employee"}</th>
                            <th class=HEAD_CLASS>{"Leave Type"}</th>
                            <th class=HEAD_CLASS>{"Start Date"}</th>
                            <th class=HEAD_CLASS>{"End Date"}</th>
                            <th class=HEAD_CLASS>{"Days"}</th>
                            <th class=HEAD_CLASS>{"Status"}</th>
                            <th class=HEAD_CLASS>{"Applied"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {requests
                            .into_iter()
                            .map(|request| {
                                let days = request.days();
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm font-medium text-gray-900">
                                            {request.employee}
                                        </td>
                                        <td class=CELL_CLASS>{request.leave_type}</td>
                                        <td class=CELL_CLASS>{request.start_date.to_string()}</td>
                                        <td class=CELL_CLASS>{request.end_date.to_string()}</td>
                                        <td class=CELL_CLASS>{days}</td>
                                        <td class="px-4 py-2">
                                            <span class="inline-flex rounded-full px-2 py-0.5 text-xs font-semibold bg-amber-100 text-amber-700">
                                                {request.status}
                                            </span>
                                        </td>
                                        <td class=CELL_CLASS>{request.applied}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </Card>
    }
}
