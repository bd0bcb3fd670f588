pub mod dashboard;
pub mod home;
pub mod leave_request;

pub use dashboard::*;
pub use home::*;
