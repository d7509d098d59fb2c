//! Конфигурация клиентских сценариев сайта.
//!
//! Страница может передать настройки встроенным JSON-блоком
//! `<script type="application/json" id="site-config">`. Отсутствующие поля берутся
//! из значений по умолчанию.

use super::catalog::ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};

/// Id встроенного JSON-блока с настройками
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// ARIA-атрибут, которым отмечается активная кнопка фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveAttr {
    #[default]
    #[serde(rename = "aria-pressed")]
    AriaPressed,
    #[serde(rename = "aria-selected")]
    AriaSelected,
}

impl ActiveAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveAttr::AriaPressed => "aria-pressed",
            ActiveAttr::AriaSelected => "aria-selected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollRevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ScrollRevealConfig {
    fn default() -> Self {
        Self {
            selector: ".feature-card, .product-card".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub active_filter_attr: ActiveAttr,
    pub items_per_page: usize,
    /// Ширина окна (px), до которой навигация считается мобильной
    pub mobile_breakpoint: f64,
    /// Запуск аудита доступности при загрузке
    pub dev_mode: bool,
    /// Отражать категорию и страницу каталога в строке запроса
    pub sync_url: bool,
    pub scroll_reveal: ScrollRevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            active_filter_attr: ActiveAttr::default(),
            items_per_page: ITEMS_PER_PAGE,
            mobile_breakpoint: 768.0,
            dev_mode: cfg!(debug_assertions),
            sync_url: true,
            scroll_reveal: ScrollRevealConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Разбор JSON с настройками поверх значений по умолчанию
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut config: SiteConfig = serde_json::from_str(json)?;
        if config.items_per_page == 0 {
            anyhow::bail!("items_per_page must be greater than zero");
        }
        if !(0.0..=1.0).contains(&config.scroll_reveal.threshold) {
            config.scroll_reveal.threshold = ScrollRevealConfig::default().threshold;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.items_per_page, 9);
        assert_eq!(config.active_filter_attr.as_str(), "aria-pressed");
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r#"{"active_filter_attr": "aria-selected", "dev_mode": true,
                "scroll_reveal": {"threshold": 0.25}}"#,
        )
        .unwrap();
        assert_eq!(config.active_filter_attr, ActiveAttr::AriaSelected);
        assert!(config.dev_mode);
        assert_eq!(config.scroll_reveal.threshold, 0.25);
        assert_eq!(config.scroll_reveal.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_invalid_config() {
        assert!(SiteConfig::from_json("not json").is_err());
        assert!(SiteConfig::from_json(r#"{"items_per_page": 0}"#).is_err());
        let config = SiteConfig::from_json(r#"{"scroll_reveal": {"threshold": 3.0}}"#).unwrap();
        assert_eq!(config.scroll_reveal.threshold, 0.1);
    }
}
