use super::filter::CategoryFilter;
use thiserror::Error;

/// Количество страниц для `visible` элементов при размере страницы `per_page`.
///
/// Для пустого подмножества (и нулевого размера страницы) возвращает 0.
pub fn compute_pages(visible: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    visible.div_ceil(per_page)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("страница {page} вне диапазона 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
}

/// Состояние пагинации. `current_page` начинается с 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
}

impl PageState {
    fn first(items_per_page: usize, visible: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            total_pages: compute_pages(visible, items_per_page),
        }
    }
}

/// Кнопка номера страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Каталог: полный список категорий карточек, активный фильтр и пагинация.
///
/// Элементы идентифицируются своей позицией в документе.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Option<String>>,
    filter: CategoryFilter,
    visible: Vec<usize>,
    page: PageState,
}

impl Catalog {
    /// Каталог с фильтром «все» на первой странице
    pub fn new(categories: Vec<Option<String>>, items_per_page: usize) -> Self {
        let visible = (0..categories.len()).collect::<Vec<_>>();
        let page = PageState::first(items_per_page, visible.len());
        Self {
            categories,
            filter: CategoryFilter::All,
            visible,
            page,
        }
    }

    /// Применяет фильтр: видимое подмножество пересчитывается из полного списка,
    /// текущая страница сбрасывается на первую.
    pub fn apply_filter(&mut self, filter: CategoryFilter) {
        self.visible = self
            .categories
            .iter()
            .enumerate()
            .filter(|(_, category)| filter.matches(category.as_deref()))
            .map(|(index, _)| index)
            .collect();
        self.filter = filter;
        self.page = PageState::first(self.page.items_per_page, self.visible.len());
    }

    /// Переход на страницу `page`. Значения вне `1..=total_pages` не корректируются.
    pub fn go_to_page(&mut self, page: usize) -> Result<(), CatalogError> {
        if page == 0 || page > self.page.total_pages {
            return Err(CatalogError::PageOutOfRange {
                page,
                total_pages: self.page.total_pages,
            });
        }
        self.page.current_page = page;
        Ok(())
    }

    /// Предыдущая страница; `false`, если уже на первой
    pub fn prev(&mut self) -> bool {
        if self.prev_disabled() {
            return false;
        }
        self.page.current_page -= 1;
        true
    }

    /// Следующая страница; `false`, если уже на последней
    pub fn next(&mut self) -> bool {
        if self.next_disabled() {
            return false;
        }
        self.page.current_page += 1;
        true
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Индексы карточек, прошедших фильтр, в порядке документа
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Индексы карточек текущей страницы: срез
    /// `[(n-1)*per_page, n*per_page)` видимого подмножества
    pub fn page_indices(&self) -> &[usize] {
        let per_page = self.page.items_per_page;
        let start = (self.page.current_page - 1)
            .saturating_mul(per_page)
            .min(self.visible.len());
        let end = start.saturating_add(per_page).min(self.visible.len());
        &self.visible[start..end]
    }

    /// Карточка проходит фильтр (без учёта страницы)
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }

    /// Карточка попадает на текущую страницу
    pub fn is_on_current_page(&self, index: usize) -> bool {
        self.page_indices().binary_search(&index).is_ok()
    }

    pub fn prev_disabled(&self) -> bool {
        self.page.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.page.current_page >= self.page.total_pages
    }

    /// По одной кнопке на каждую страницу в порядке возрастания номера
    pub fn page_buttons(&self) -> Vec<PageButton> {
        (1..=self.page.total_pages)
            .map(|number| PageButton {
                number,
                active: number == self.page.current_page,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::ITEMS_PER_PAGE;
    use proptest::prelude::*;

    fn catalog_of(tags: &[&str]) -> Catalog {
        Catalog::new(
            tags.iter().map(|t| Some(t.to_string())).collect(),
            ITEMS_PER_PAGE,
        )
    }

    #[test]
    fn test_compute_pages() {
        assert_eq!(compute_pages(0, 9), 0);
        assert_eq!(compute_pages(1, 9), 1);
        assert_eq!(compute_pages(9, 9), 1);
        assert_eq!(compute_pages(10, 9), 2);
        assert_eq!(compute_pages(20, 9), 3);
        assert_eq!(compute_pages(5, 0), 0);
    }

    #[test]
    fn test_mixed_categories_fit_one_page() {
        let mut catalog = catalog_of(&["a", "a", "b", "a", "b", "b", "a", "a", "b", "a"]);
        catalog.apply_filter(CategoryFilter::from_code("a"));

        assert_eq!(catalog.visible_indices(), &[0, 1, 3, 6, 7, 9]);
        assert_eq!(catalog.total_pages(), 1);
        assert_eq!(catalog.page_indices(), &[0, 1, 3, 6, 7, 9]);
        assert!(catalog.prev_disabled());
        assert!(catalog.next_disabled());
        assert!(!catalog.is_on_current_page(2));
    }

    #[test]
    fn test_twenty_items_three_pages() {
        let tags = vec!["x"; 20];
        let mut catalog = catalog_of(&tags);
        catalog.apply_filter(CategoryFilter::from_code("x"));
        assert_eq!(catalog.total_pages(), 3);

        assert!(!catalog.next_disabled());
        catalog.go_to_page(2).unwrap();
        assert_eq!(catalog.page_indices(), &[9, 10, 11, 12, 13, 14, 15, 16, 17]);
        assert!(!catalog.next_disabled());
        assert!(!catalog.prev_disabled());

        catalog.go_to_page(3).unwrap();
        assert_eq!(catalog.page_indices(), &[18, 19]);
        assert!(catalog.next_disabled());
    }

    #[test]
    fn test_filter_resets_page() {
        let tags = vec!["x"; 20];
        let mut catalog = catalog_of(&tags);
        catalog.go_to_page(3).unwrap();
        catalog.apply_filter(CategoryFilter::All);
        assert_eq!(catalog.current_page(), 1);
    }

    #[test]
    fn test_empty_result_is_renderable() {
        let mut catalog = catalog_of(&["a", "b"]);
        catalog.apply_filter(CategoryFilter::from_code("missing"));

        assert_eq!(catalog.total_pages(), 0);
        assert_eq!(catalog.current_page(), 1);
        assert!(catalog.page_indices().is_empty());
        assert!(catalog.page_buttons().is_empty());
        assert!(catalog.prev_disabled());
        assert!(catalog.next_disabled());
        assert!(!catalog.next());
    }

    #[test]
    fn test_go_to_page_out_of_range() {
        let mut catalog = catalog_of(&["a"; 10]);
        assert_eq!(
            catalog.go_to_page(0),
            Err(CatalogError::PageOutOfRange { page: 0, total_pages: 2 })
        );
        assert!(catalog.go_to_page(3).is_err());
        assert_eq!(catalog.current_page(), 1);
    }

    #[test]
    fn test_prev_next() {
        let mut catalog = catalog_of(&["a"; 19]);
        assert!(!catalog.prev());
        assert!(catalog.next());
        assert!(catalog.next());
        assert!(!catalog.next());
        assert_eq!(catalog.current_page(), 3);
        assert!(catalog.prev());
        assert_eq!(catalog.current_page(), 2);
    }

    #[test]
    fn test_items_without_category() {
        let mut catalog = Catalog::new(vec![None, Some("a".into()), None], ITEMS_PER_PAGE);
        assert_eq!(catalog.visible_indices(), &[0, 1, 2]);
        catalog.apply_filter(CategoryFilter::from_code("a"));
        assert_eq!(catalog.visible_indices(), &[1]);
        assert!(catalog.is_visible(1));
        assert!(!catalog.is_visible(0));
    }

    fn categories_strategy() -> impl Strategy<Value = Vec<Option<String>>> {
        prop::collection::vec(
            prop::option::weighted(0.9, prop::sample::select(vec!["a", "b", "c"]))
                .prop_map(|c| c.map(String::from)),
            0..60,
        )
    }

    proptest! {
        #[test]
        fn visible_count_matches_filter(
            categories in categories_strategy(),
            code in prop::sample::select(vec!["all", "a", "b", "c", "zzz"]),
        ) {
            let filter = CategoryFilter::from_code(code);
            let expected = if filter == CategoryFilter::All {
                categories.len()
            } else {
                categories.iter().filter(|c| c.as_deref() == Some(code)).count()
            };
            let mut catalog = Catalog::new(categories, ITEMS_PER_PAGE);
            catalog.apply_filter(filter);
            prop_assert_eq!(catalog.visible_indices().len(), expected);
            prop_assert_eq!(catalog.total_pages(), expected.div_ceil(ITEMS_PER_PAGE));
        }

        #[test]
        fn every_page_renders_its_slice(categories in categories_strategy(), start in 1usize..8) {
            let mut catalog = Catalog::new(categories, ITEMS_PER_PAGE);
            catalog.apply_filter(CategoryFilter::All);
            let visible = catalog.visible_indices().to_vec();
            for page in 1..=catalog.total_pages() {
                catalog.go_to_page(page).unwrap();
                let from = (page - 1) * ITEMS_PER_PAGE;
                let to = (page * ITEMS_PER_PAGE).min(visible.len());
                prop_assert_eq!(catalog.page_indices(), &visible[from..to]);

                let buttons = catalog.page_buttons();
                prop_assert_eq!(buttons.len(), catalog.total_pages());
                let active = buttons.iter().filter(|b| b.active).collect::<Vec<_>>();
                prop_assert_eq!(active.len(), 1);
                prop_assert_eq!(active[0].number, page);
            }

            // Повторный фильтр всегда возвращает на первую страницу
            let _ = catalog.go_to_page(start);
            catalog.apply_filter(CategoryFilter::from_code("b"));
            prop_assert_eq!(catalog.current_page(), 1);
            prop_assert!(catalog.current_page() <= catalog.total_pages().max(1));
        }
    }
}
