use crate::utils::dates::{inclusive_days, parse_form_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaveShare {
    pub label: String,
    pub percent: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRequest {
    pub employee: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub applied: String,
}

impl RecentRequest {
    pub fn days(&self) -> i64 {
        inclusive_days(self.start_date, self.end_date)
    }
}

/// Everything the reports dashboard displays besides the leave form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub kpis: Vec<Kpi>,
    pub departments: Vec<ChartPoint>,
    pub leave_types: Vec<LeaveShare>,
    pub monthly_trend: Vec<ChartPoint>,
    pub recent_requests: Vec<RecentRequest>,
}

/// Fixed sample figures; the dashboard has no reporting backend yet.
pub fn sample_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        kpis: vec![
            kpi("Total Employees", "248"),
            kpi("Pending Requests", "12"),
            kpi("Approved This Month", "45"),
            kpi("Average Days/Employee", "18.5"),
        ],
        departments: points(&[
            ("Engineering", 89.0),
            ("Marketing", 42.0),
            ("Sales", 68.0),
            ("HR", 28.0),
            ("Finance", 35.0),
            ("Operations", 52.0),
        ]),
        leave_types: vec![
            share("Annual Leave", 50.0, "#3B82F6"),
            share("Sick Leave", 27.0, "#10B981"),
            share("Personal Leave", 15.0, "#F59E0B"),
            share("Maternity/Paternity", 8.0, "#EF4444"),
        ],
        monthly_trend: points(&[
            ("Jan", 46.0),
            ("Feb", 39.0),
            ("Mar", 52.0),
            ("Apr", 61.0),
            ("May", 49.0),
            ("Jun", 55.0),
        ]),
        recent_requests: [
            ("Emily Rodriguez", "Annual", "2025-11-29", "2025-11-30", "29/11/2025, 02:10:37"),
            ("—", "Annual", "2025-11-28", "2025-11-29", "28/11/2025, 12:47:24"),
            ("Sarah Johnson", "Personal", "2025-11-27", "2025-11-29", "28/11/2025, 12:25:19"),
            ("Emily Rodriguez", "Annual", "2025-11-28", "2025-11-30", "28/11/2025, 12:24:00"),
        ]
        .into_iter()
        .filter_map(|(employee, leave_type, start, end, applied)| {
            Some(RecentRequest {
                employee: employee.into(),
                leave_type: leave_type.into(),
                start_date: parse_form_date(start)?,
                end_date: parse_form_date(end)?,
                status: "Pending".into(),
                applied: applied.into(),
            })
        })
        .collect(),
    }
}

fn kpi(label: &str, value: &str) -> Kpi {
    Kpi {
        label: label.into(),
        value: value.into(),
    }
}

fn points(values: &[(&str, f64)]) -> Vec<ChartPoint> {
    values
        .iter()
        .map(|(label, value)| ChartPoint {
            label: (*label).into(),
            value: *value,
        })
        .collect()
}

fn share(label: &str, percent: f64, color: &str) -> LeaveShare {
    LeaveShare {
        label: label.into(),
        percent,
        color: color.into(),
    }
}
