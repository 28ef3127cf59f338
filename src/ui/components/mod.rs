pub mod add_todo_dialog;
pub mod confirm_dialog;
pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod tabs;
pub mod toast;
pub mod todo_list;
