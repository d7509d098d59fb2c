//! Плавное появление элементов при прокрутке (IntersectionObserver)

use crate::shared::dom::set_style;
use contracts::shared::config::ScrollRevealConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub fn init_scroll_reveal(elements: Vec<HtmlElement>, config: &ScrollRevealConfig) {
    if elements.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    set_style(element, "opacity", "1");
                    set_style(element, "transform", "translateY(0)");
                }
                // Появление одноразовое
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            // Без наблюдателя элементы остаются видимыми как есть
            log::warn!("scroll reveal: IntersectionObserver unavailable: {:?}", err);
            return;
        }
    };
    callback.forget();

    for element in &elements {
        set_style(element, "opacity", "0");
        set_style(element, "transform", "translateY(20px)");
        set_style(element, "transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(element);
    }

    log::debug!("scroll reveal: observing {} elements", elements.len());
}
