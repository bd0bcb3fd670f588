use web_sys::{Storage, Window};

/// Local-storage key written on sign-out so other tabs can follow along.
pub const SESSION_BROADCAST_KEY: &str = "leavedesk.session";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn broadcast_session_change(marker: &str) -> Result<(), String> {
    local_storage()?
        .set_item(SESSION_BROADCAST_KEY, marker)
        .map_err(|_| "Failed to write session marker".to_string())
}
