pub mod charts;
pub mod kpi;
pub mod quick_pick;
pub mod recent_requests;

pub use charts::{DepartmentChart, LeaveTypeChart, MonthlyTrendChart};
pub use kpi::KpiCards;
pub use quick_pick::QuickPick;
pub use recent_requests::RecentRequestsTable;
