pub mod admin_panel;
pub mod broadcast_view;
pub mod config_error;
pub mod embed_code_panel;
pub mod icons;
pub mod join_request_form;
pub mod toast;

mod request_card;
