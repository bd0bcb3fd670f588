pub mod notifications;
pub mod session;
pub mod session_gate;
