//! Фильтр каталога с постраничным выводом.
//!
//! Каталог хранит категории всех карточек в порядке их следования в документе.
//! Видимое подмножество всегда пересчитывается из полного списка при смене фильтра,
//! а пагинация работает только по этому подмножеству.

pub mod filter;
pub mod paginator;

// Re-exports
pub use filter::CategoryFilter;
pub use paginator::{compute_pages, Catalog, CatalogError, PageButton, PageState};

/// Размер страницы каталога по умолчанию
pub const ITEMS_PER_PAGE: usize = 9;
