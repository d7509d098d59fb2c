pub mod a11y_audit;
pub mod catalog;
pub mod contact_form;
pub mod dom;
pub mod phone_input;
pub mod scroll_reveal;
pub mod site_config;
