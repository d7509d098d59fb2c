use crate::shared::dom::listen;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlAnchorElement, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

/// Через сколько миллисекунд снимается временный `tabindex` с цели
const TABINDEX_RESET_MS: u32 = 1000;

/// Skip-link переводит фокус на цель ссылки и плавно прокручивает к ней
pub fn init_skip_link(link: Option<HtmlAnchorElement>) {
    let Some(link) = link else {
        log::debug!("skip-link: not found, skipped");
        return;
    };

    let anchor = link.clone();
    listen(&link, "click", move |e: MouseEvent| {
        e.prevent_default();

        let href = anchor.get_attribute("href").unwrap_or_default();
        let id = href.trim_start_matches('#');
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("skip-link: target `{}` not found", href);
            return;
        };

        let _ = target.set_attribute("tabindex", "-1");
        let _ = target.focus();

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);

        Timeout::new(TABINDEX_RESET_MS, move || {
            let _ = target.remove_attribute("tabindex");
        })
        .forget();
    });
}
