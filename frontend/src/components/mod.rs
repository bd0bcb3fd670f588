pub mod dialog;
pub mod file_picker;
pub mod guard;
pub mod layout;
pub mod toast;
