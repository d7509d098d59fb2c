use contracts::shared::catalog::Catalog;
use leptos::prelude::*;

/// PaginationPages component - кнопки номеров страниц каталога.
///
/// Монтируется в контейнер `.pagination-pages` и перестраивается при каждом
/// изменении фильтра или текущей страницы.
#[component]
pub fn PaginationPages(
    /// Состояние каталога
    catalog: RwSignal<Catalog>,
) -> impl IntoView {
    let go_to_page = move |page: usize| {
        catalog.update(|c| {
            if let Err(err) = c.go_to_page(page) {
                log::warn!("pagination: {}", err);
            }
        });
    };

    view! {
        {move || {
            catalog
                .with(|c| c.page_buttons())
                .into_iter()
                .map(|button| {
                    let number = button.number;
                    let class = if button.active { "pagination-page active" } else { "pagination-page" };
                    let current = if button.active { "page" } else { "false" };
                    let label = format!("Страница {}", number);
                    view! {
                        <button
                            type="button"
                            class=class
                            aria-label=label
                            aria-current=current
                            on:click=move |_| go_to_page(number)
                        >
                            {number}
                        </button>
                    }
                })
                .collect_view()
        }}
    }
}
