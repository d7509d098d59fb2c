use serde::{Deserialize, Serialize};

/// Снимок страницы, достаточный для ручных проверок доступности
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Уровни заголовков `h1..h6` в порядке документа
    pub heading_levels: Vec<u8>,
    /// Семантические теги, присутствующие на странице
    pub landmarks: Vec<String>,
    pub has_skip_link: bool,
    pub navs: Vec<NavSnapshot>,
    pub forms: Vec<FormSnapshot>,
    pub focusables: Vec<FocusableSnapshot>,
    /// Вычисленное значение `outline-style` корневого элемента
    pub root_outline_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavSnapshot {
    /// Есть `aria-label` или `aria-labelledby`
    pub labelled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub fields: Vec<FieldSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub has_label: bool,
    pub hidden: bool,
    pub required: bool,
    pub aria_required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FocusableSnapshot {
    /// Элемент отрисован (`offsetParent` не `null`)
    pub rendered: bool,
    /// Значение атрибута `tabindex`, если он задан и является числом
    pub tabindex_attr: Option<i32>,
    /// Свойство `tabIndex` DOM-элемента
    pub tab_index: i32,
}

/// Разбор уровня заголовка из имени тега (`H2` → 2)
pub fn heading_level(tag_name: &str) -> Option<u8> {
    let tag = tag_name.to_ascii_lowercase();
    let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}
