use crate::layout::{init_mobile_nav, init_skip_link, NavElements};
use crate::shared::a11y_audit::run_audit;
use crate::shared::catalog::{init_catalog, CatalogElements};
use crate::shared::contact_form::init_contact_form;
use crate::shared::dom::{query_all, query_one};
use crate::shared::phone_input::init_phone_inputs;
use crate::shared::scroll_reveal::init_scroll_reveal;
use crate::shared::site_config::load_site_config;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Ссылки на все элементы страницы, с которыми работают сценарии.
///
/// Отсутствующий элемент — `None` или пустой список; зависящая от него
/// функция тогда просто не подключается.
pub struct SiteElements {
    pub nav: NavElements,
    pub skip_link: Option<HtmlAnchorElement>,
    pub catalog: CatalogElements,
    pub contact_form: Option<HtmlFormElement>,
    pub phone_inputs: Vec<HtmlInputElement>,
    pub reveal: Vec<HtmlElement>,
}

impl SiteElements {
    pub fn query(document: &Document, config: &SiteConfig) -> Self {
        Self {
            nav: NavElements::query(document),
            skip_link: query_one(document, ".skip-link"),
            catalog: CatalogElements::query(document),
            contact_form: document
                .get_element_by_id("contactForm")
                .and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
            phone_inputs: query_all(document, "input[type=\"tel\"], input#phone"),
            reveal: query_all(document, &config.scroll_reveal.selector),
        }
    }
}

/// Подключает все сценарии к переданным элементам
pub fn init_site(elements: SiteElements, config: &SiteConfig) {
    let SiteElements {
        nav,
        skip_link,
        catalog,
        contact_form,
        phone_inputs,
        reveal,
    } = elements;

    init_mobile_nav(nav, config.mobile_breakpoint);
    init_skip_link(skip_link);
    init_scroll_reveal(reveal, &config.scroll_reveal);
    init_catalog(catalog, config);
    init_contact_form(contact_form);
    init_phone_inputs(phone_inputs);

    if config.dev_mode {
        run_audit();
    }
}

#[component]
pub fn App() -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let config = load_site_config(&document);
        let elements = SiteElements::query(&document, &config);
        init_site(elements, &config);
    } else {
        log::warn!("document is not available");
    }

    view! { <></> }
}
