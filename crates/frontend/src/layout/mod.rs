//! Общие элементы раскладки страницы: мобильная навигация и skip-link

pub mod mobile_nav;
pub mod skip_link;

pub use mobile_nav::{init_mobile_nav, NavElements};
pub use skip_link::init_skip_link;
