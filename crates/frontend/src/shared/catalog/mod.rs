//! Фильтр каталога и пагинация поверх готовой разметки.
//!
//! Кнопки `.filter-button[data-filter]` переключают категорию, карточки
//! `.product-card[data-category]` показываются только на текущей странице
//! отфильтрованного подмножества. Кнопки номеров страниц рендерит
//! [`PaginationPages`] внутри `.pagination-pages`.

pub mod card;
pub mod pagination;
pub mod url_state;

use crate::shared::dom::{listen, query_all, query_one, set_class};
use card::CardHandle;
use contracts::shared::catalog::{Catalog, CategoryFilter};
use contracts::shared::config::{ActiveAttr, SiteConfig};
use leptos::prelude::*;
use pagination::PaginationPages;
use web_sys::{Document, HtmlButtonElement, HtmlElement, KeyboardEvent, MouseEvent};

/// Элементы каталога на странице. Отсутствие контейнера пагинации отключает
/// постраничный вывод, но не фильтр.
pub struct CatalogElements {
    pub filter_buttons: Vec<HtmlElement>,
    pub cards: Vec<HtmlElement>,
    pub pages_container: Option<HtmlElement>,
    pub prev: Option<HtmlButtonElement>,
    pub next: Option<HtmlButtonElement>,
}

impl CatalogElements {
    pub fn query(document: &Document) -> Self {
        Self {
            filter_buttons: query_all(document, ".filter-button[data-filter]"),
            cards: query_all(document, ".product-card"),
            pages_container: query_one(document, ".pagination-pages"),
            prev: query_one(document, ".pagination-prev"),
            next: query_one(document, ".pagination-next"),
        }
    }
}

fn filter_of(button: &HtmlElement) -> CategoryFilter {
    CategoryFilter::from_code(&button.get_attribute("data-filter").unwrap_or_default())
}

/// Подключает фильтр и пагинацию. Без карточек на странице ничего не делает.
pub fn init_catalog(elements: CatalogElements, config: &SiteConfig) {
    let CatalogElements {
        filter_buttons,
        cards,
        pages_container,
        prev,
        next,
    } = elements;

    if cards.is_empty() {
        log::debug!("catalog: no .product-card elements, skipped");
        return;
    }

    let cards = cards.into_iter().map(CardHandle::new).collect::<Vec<_>>();
    let categories = cards.iter().map(CardHandle::category).collect::<Vec<_>>();
    let catalog = RwSignal::new(Catalog::new(categories, config.items_per_page));

    if config.sync_url {
        let available = filter_buttons.iter().map(filter_of).collect::<Vec<_>>();
        let restored = url_state::read_catalog_state().and_then(|state| {
            let filter = state.filter.clone();
            let restored = state.restorable(&available);
            if restored.is_none() {
                log::debug!("catalog: unknown category `{}` in url ignored", filter);
            }
            restored
        });
        if let Some(state) = restored {
            catalog.update(|c| {
                c.apply_filter(state.filter);
                if let Some(page) = state.page {
                    if let Err(err) = c.go_to_page(page) {
                        log::debug!("catalog: page from url ignored: {}", err);
                    }
                }
            });
        }
    }

    bind_filter_buttons(filter_buttons, catalog, config.active_filter_attr);

    let paged = match pages_container {
        Some(container) => {
            container.set_inner_html("");
            leptos::mount::mount_to(container, move || view! { <PaginationPages catalog=catalog /> })
                .forget();
            bind_prev_next(prev, next, catalog);
            true
        }
        None => {
            log::debug!("catalog: .pagination-pages not found, pagination disabled");
            false
        }
    };

    // Видимость карточек всегда выводится из текущего состояния каталога
    Effect::new(move |_| {
        catalog.with(|c| {
            for (index, card) in cards.iter().enumerate() {
                let shown = if paged {
                    c.is_on_current_page(index)
                } else {
                    c.is_visible(index)
                };
                card.set_shown(shown);
            }
        });
    });

    if config.sync_url {
        Effect::new(move |_| {
            catalog.with(|c| url_state::write_catalog_state(c.filter(), c.current_page()));
        });
    }

    catalog.with_untracked(|c| {
        log::info!(
            "catalog: {} items, filter `{}`, {} pages",
            c.len(),
            c.filter(),
            c.total_pages()
        );
    });
}

fn bind_filter_buttons(buttons: Vec<HtmlElement>, catalog: RwSignal<Catalog>, attr: ActiveAttr) {
    for button in &buttons {
        let filter = filter_of(button);
        listen(button, "click", move |_: MouseEvent| {
            log::debug!("catalog: filter `{}`", filter);
            catalog.update(|c| c.apply_filter(filter.clone()));
        });

        let target = button.clone();
        listen(button, "keydown", move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                target.click();
            }
        });
    }

    // Ровно одна кнопка отмечена активной
    Effect::new(move |_| {
        catalog.with(|c| {
            for button in &buttons {
                let active = filter_of(button) == *c.filter();
                set_class(button, "active", active);
                let _ = button.set_attribute(attr.as_str(), if active { "true" } else { "false" });
            }
        });
    });
}

fn bind_prev_next(
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    catalog: RwSignal<Catalog>,
) {
    if let Some(prev) = &prev {
        listen(prev, "click", move |_: MouseEvent| {
            catalog.update(|c| {
                c.prev();
            });
        });
    }
    if let Some(next) = &next {
        listen(next, "click", move |_: MouseEvent| {
            catalog.update(|c| {
                c.next();
            });
        });
    }

    Effect::new(move |_| {
        catalog.with(|c| {
            if let Some(prev) = &prev {
                let first = c.prev_disabled();
                prev.set_disabled(first);
                let _ = prev.set_attribute(
                    "aria-label",
                    if first { "Первая страница" } else { "Предыдущая страница" },
                );
            }
            if let Some(next) = &next {
                let last = c.next_disabled();
                next.set_disabled(last);
                let _ = next.set_attribute(
                    "aria-label",
                    if last { "Последняя страница" } else { "Следующая страница" },
                );
            }
        });
    });
}
