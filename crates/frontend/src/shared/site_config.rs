use contracts::shared::config::{SiteConfig, CONFIG_ELEMENT_ID};
use web_sys::Document;

/// Читает настройки из встроенного JSON-блока страницы.
///
/// Без блока или при ошибке разбора используются значения по умолчанию.
pub fn load_site_config(document: &Document) -> SiteConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        log::debug!("#{} not found, default site config", CONFIG_ELEMENT_ID);
        return SiteConfig::default();
    };

    let json = element.text_content().unwrap_or_default();
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("site config loaded: {:?}", config);
            config
        }
        Err(err) => {
            log::warn!("invalid #{}: {:#}, using defaults", CONFIG_ELEMENT_ID, err);
            SiteConfig::default()
        }
    }
}
