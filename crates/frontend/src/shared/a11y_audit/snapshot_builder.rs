use crate::shared::contact_form::form_fields;
use crate::shared::dom::query_all;
use contracts::shared::a11y::{
    heading_level, FieldSnapshot, FocusableSnapshot, FormSnapshot, NavSnapshot, PageSnapshot,
    SEMANTIC_ELEMENTS,
};
use contracts::shared::contact_form::FieldKind;
use web_sys::{Element, HtmlElement, HtmlFormElement, Window};

const FOCUSABLE_SELECTOR: &str = "button, a, input, select, textarea, [tabindex]";

/// Снимок живого DOM для проверок доступности
pub fn build_page_snapshot(window: &Window) -> Option<PageSnapshot> {
    let document = window.document()?;

    let heading_levels = query_all::<Element>(&document, "h1, h2, h3, h4, h5, h6")
        .iter()
        .filter_map(|h| heading_level(&h.tag_name()))
        .collect();

    let landmarks = SEMANTIC_ELEMENTS
        .iter()
        .filter(|tag| matches!(document.query_selector(tag), Ok(Some(_))))
        .map(|tag| tag.to_string())
        .collect();

    let navs = query_all::<Element>(&document, "nav")
        .iter()
        .map(|nav| NavSnapshot {
            labelled: nav.has_attribute("aria-label") || nav.has_attribute("aria-labelledby"),
        })
        .collect();

    let forms = query_all::<HtmlFormElement>(&document, "form")
        .iter()
        .map(|form| FormSnapshot {
            fields: form_fields(form)
                .iter()
                .map(|field| FieldSnapshot {
                    has_label: field.has_label(),
                    hidden: field.kind() == FieldKind::Hidden,
                    required: field.required(),
                    aria_required: field.element().has_attribute("aria-required"),
                })
                .collect(),
        })
        .collect();

    let focusables = query_all::<HtmlElement>(&document, FOCUSABLE_SELECTOR)
        .iter()
        .map(|el| FocusableSnapshot {
            rendered: el.offset_parent().is_some(),
            tabindex_attr: el
                .get_attribute("tabindex")
                .and_then(|v| v.trim().parse::<i32>().ok()),
            tab_index: el.tab_index(),
        })
        .collect();

    let root_outline_style = document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value("outline-style").ok());

    Some(PageSnapshot {
        heading_levels,
        landmarks,
        has_skip_link: matches!(document.query_selector(".skip-link"), Ok(Some(_))),
        navs,
        forms,
        focusables,
        root_outline_style,
    })
}
