use crate::{
    components::layout::Card,
    pages::dashboard::{
        repository::{ChartPoint, LeaveShare},
        utils::{bar_height_percent, conic_gradient, max_value, polyline_points, share_label},
    },
};
use leptos::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;

#[component]
pub fn DepartmentChart(points: Vec<ChartPoint>) -> impl IntoView {
    let max = max_value(&points);
    view! {
        <Card>
            <h3 class="font-semibold text-gray-900 mb-6">{"Leave Requests by Department"}</h3>
            <div class="flex items-end gap-4 h-72 border-b border-gray-200">
                {points
                    .into_iter()
                    .map(|point| {
                        let style = format!("height: {:.1}%", bar_height_percent(point.value, max));
                        view! {
                            <div class="flex-1 flex flex-col items-center justify-end h-full">
                                <span class="text-xs text-gray-500 mb-1">{point.value}</span>
                                <div class="w-full rounded-t bg-blue-500" style=style></div>
                                <span class="mt-2 text-xs text-gray-500">{point.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
pub fn LeaveTypeChart(shares: Vec<LeaveShare>) -> impl IntoView {
    let pie_style = format!(
        "background: {}; width: 200px; height: 200px;",
        conic_gradient(&shares)
    );
    view! {
        <Card>
            <h3 class="font-semibold text-gray-900 mb-6">{"Leave Types Distribution"}</h3>
            <div class="flex flex-col items-center gap-6">
                <div class="rounded-full" style=pie_style></div>
                <ul class="flex flex-wrap justify-center gap-4">
                    {shares
                        .into_iter()
                        .map(|share| {
                            let swatch = format!("background: {};", share.color);
                            let text = format!("color: {};", share.color);
                            let label = share_label(&share);
                            view! {
                                <li class="flex items-center gap-2 text-sm">
                                    <span class="inline-block h-3 w-3 rounded-sm" style=swatch></span>
                                    <span style=text>{label}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Card>
    }
}

#[component]
pub fn MonthlyTrendChart(points: Vec<ChartPoint>) -> impl IntoView {
    let line = polyline_points(&points, CHART_WIDTH, CHART_HEIGHT);
    let view_box = format!("-10 -10 {} {}", CHART_WIDTH + 20.0, CHART_HEIGHT + 20.0);
    let step = if points.len() > 1 {
        CHART_WIDTH / (points.len() - 1) as f64
    } else {
        0.0
    };
    let max = max_value(&points);
    view! {
        <Card>
            <h3 class="font-semibold text-gray-900 mb-6">{"Monthly Leave Trends"}</h3>
            <svg class="w-full h-72" viewBox=view_box preserveAspectRatio="none">
                <polyline fill="none" stroke="#10B981" stroke-width="2" points=line></polyline>
                {points
                    .iter()
                    .enumerate()
                    .map(|(i, point)| {
                        let cx = format!("{:.1}", step * i as f64);
                        let cy = format!(
                            "{:.1}",
                            CHART_HEIGHT - bar_height_percent(point.value, max) / 100.0 * CHART_HEIGHT
                        );
                        view! { <circle cx=cx cy=cy r="6" fill="#10B981"></circle> }
                    })
                    .collect_view()}
            </svg>
            <div class="flex justify-between text-xs text-gray-500 mt-2">
                {points
                    .into_iter()
                    .map(|point| view! { <span>{point.label}</span> })
                    .collect_view()}
            </div>
        </Card>
    }
}
