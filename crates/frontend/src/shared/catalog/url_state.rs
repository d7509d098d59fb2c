//! Категория и страница каталога в строке запроса (`?category=..&page=..`)

use contracts::shared::catalog::CategoryFilter;
use std::collections::HashMap;
use web_sys::window;

const CATEGORY_PARAM: &str = "category";
const PAGE_PARAM: &str = "page";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogUrlState {
    pub filter: CategoryFilter,
    pub page: Option<usize>,
}

impl CatalogUrlState {
    /// Состояние применимо, только если категория есть среди кнопок фильтра.
    /// `All` допустим всегда, это состояние по умолчанию.
    pub fn restorable(self, available: &[CategoryFilter]) -> Option<Self> {
        match &self.filter {
            CategoryFilter::All => Some(self),
            filter if available.contains(filter) => Some(self),
            _ => None,
        }
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn parse_params(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Разбор состояния каталога из строки запроса
pub fn parse_catalog_state(search: &str) -> Option<CatalogUrlState> {
    let params = parse_params(search);
    let filter = params.get(CATEGORY_PARAM).map(|c| CategoryFilter::from_code(c));
    let page = params.get(PAGE_PARAM).and_then(|p| p.parse::<usize>().ok());
    if filter.is_none() && page.is_none() {
        return None;
    }
    Some(CatalogUrlState {
        filter: filter.unwrap_or_default(),
        page,
    })
}

/// Строка запроса с обновлёнными параметрами каталога; прочие параметры сохраняются
pub fn build_search(search: &str, filter: &CategoryFilter, page: usize) -> String {
    let mut params = parse_params(search);
    match filter {
        CategoryFilter::All => params.remove(CATEGORY_PARAM),
        CategoryFilter::Tag(tag) => params.insert(CATEGORY_PARAM.to_string(), tag.clone()),
    };
    if page > 1 {
        params.insert(PAGE_PARAM.to_string(), page.to_string());
    } else {
        params.remove(PAGE_PARAM);
    }

    if params.is_empty() {
        return String::new();
    }
    // Стабильный порядок параметров
    let ordered = params.into_iter().collect::<std::collections::BTreeMap<_, _>>();
    format!("?{}", serde_qs::to_string(&ordered).unwrap_or_default())
}

pub fn read_catalog_state() -> Option<CatalogUrlState> {
    parse_catalog_state(&current_search())
}

/// Заменяет строку запроса без новой записи в истории
pub fn write_catalog_state(filter: &CategoryFilter, page: usize) {
    let Some(w) = window() else { return };
    let search = current_search();
    let new_search = build_search(&search, filter, page);
    if new_search == search {
        return;
    }

    let pathname = w.location().pathname().unwrap_or_default();
    let hash = w.location().hash().unwrap_or_default();
    let new_url = format!("{}{}{}", pathname, new_search, hash);
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}
