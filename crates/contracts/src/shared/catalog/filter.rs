use serde::{Deserialize, Serialize};

/// Значение `data-filter`, означающее «все категории»
pub const FILTER_ALL: &str = "all";

/// Активный фильтр каталога. В каждый момент активен ровно один.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    /// Разбор значения атрибута `data-filter`
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            FILTER_ALL => CategoryFilter::All,
            tag => CategoryFilter::Tag(tag.to_string()),
        }
    }

    /// Код фильтра (обратное к [`CategoryFilter::from_code`])
    pub fn code(&self) -> &str {
        match self {
            CategoryFilter::All => FILTER_ALL,
            CategoryFilter::Tag(tag) => tag,
        }
    }

    /// Проходит ли карточка с указанной категорией через фильтр.
    ///
    /// Карточка без категории видна только при фильтре «все».
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => category == Some(tag.as_str()),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(CategoryFilter::from_code("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_code("shoes"),
            CategoryFilter::Tag("shoes".to_string())
        );
        assert_eq!(CategoryFilter::from_code(" all "), CategoryFilter::All);
    }

    #[test]
    fn test_matches() {
        let tag = CategoryFilter::from_code("a");
        assert!(tag.matches(Some("a")));
        assert!(!tag.matches(Some("b")));
        assert!(!tag.matches(None));
        assert!(CategoryFilter::All.matches(None));
        assert!(CategoryFilter::All.matches(Some("b")));
    }

    #[test]
    fn test_code_roundtrip_display() {
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(CategoryFilter::from_code("x").code(), "x");
    }
}
