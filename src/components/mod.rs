pub mod charts;
pub mod error_message;
pub mod file_upload;
pub mod footer;
pub mod form_field;
pub mod history_item;
pub mod history_list;
pub mod loading_spinner;
pub mod login_form;
pub mod navbar;
pub mod register_form;
pub mod results_display;
pub mod sequence_input;
pub mod sequence_tabs;
pub mod toast_container;
