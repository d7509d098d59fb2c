pub mod a11y;
pub mod catalog;
pub mod config;
pub mod contact_form;
pub mod phone_mask;
pub mod transition;
