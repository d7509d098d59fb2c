use crate::shared::dom::{listen, query_all, query_one, set_class, viewport_width};
use leptos::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent};

/// Элементы мобильной навигации
pub struct NavElements {
    pub toggle: Option<HtmlElement>,
    pub nav: Option<HtmlElement>,
    pub overlay: Option<HtmlElement>,
    pub body: Option<HtmlElement>,
    pub links: Vec<HtmlElement>,
}

impl NavElements {
    pub fn query(document: &Document) -> Self {
        Self {
            toggle: query_one(document, ".nav-toggle"),
            nav: query_one(document, ".site-nav"),
            overlay: query_one(document, ".overlay"),
            body: document.body(),
            links: query_all(document, ".nav-link"),
        }
    }
}

/// Бургер-меню: открытие по кнопке, закрытие по оверлею, ссылке (на мобильных),
/// Escape и расширению окна за `breakpoint`.
pub fn init_mobile_nav(elements: NavElements, breakpoint: f64) {
    let NavElements {
        toggle,
        nav,
        overlay,
        body,
        links,
    } = elements;

    let (Some(toggle), Some(nav)) = (toggle, nav) else {
        log::debug!("nav: .nav-toggle or .site-nav not found, skipped");
        return;
    };

    let open = RwSignal::new(false);

    {
        let toggle = toggle.clone();
        let overlay = overlay.clone();
        Effect::new(move |_| {
            let is_open = open.get();
            set_class(&toggle, "active", is_open);
            let _ = toggle.set_attribute("aria-expanded", if is_open { "true" } else { "false" });
            set_class(&nav, "active", is_open);
            if let Some(overlay) = &overlay {
                set_class(overlay, "active", is_open);
            }
            if let Some(body) = &body {
                set_class(body, "menu-open", is_open);
            }
        });
    }

    listen(&toggle, "click", move |_: MouseEvent| {
        open.update(|o| *o = !*o);
    });

    if let Some(overlay) = &overlay {
        listen(overlay, "click", move |_: MouseEvent| open.set(false));
    }

    for link in &links {
        listen(link, "click", move |_: MouseEvent| {
            if viewport_width() <= breakpoint {
                open.set(false);
            }
        });
    }

    if let Some(window) = web_sys::window() {
        listen(&window, "resize", move |_: web_sys::Event| {
            if viewport_width() > breakpoint && open.get_untracked() {
                open.set(false);
            }
        });

        if let Some(document) = window.document() {
            listen(&document, "keydown", move |e: KeyboardEvent| {
                if e.key() == "Escape" && open.get_untracked() {
                    open.set(false);
                }
            });
        }
    }

    log::debug!("nav: initialised, {} links", links.len());
}
